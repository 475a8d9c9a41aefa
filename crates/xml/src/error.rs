use thiserror::Error;

#[derive(Error, Debug)]
pub enum XmlError {
    #[error("XML parsing error (roxmltree): {0}")]
    Roxmltree(#[from] roxmltree::Error),
}
