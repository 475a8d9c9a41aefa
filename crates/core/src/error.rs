// src/error.rs
//! Defines the error type for loading a document in either dialect.

use ofxtree_sgml::SgmlError;
use ofxtree_xml::XmlError;
use thiserror::Error;

/// Everything that can stop [`crate::Document::load`].
///
/// Not being in the tag-soup dialect is not an error; it only selects the
/// XML reader.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Tag-soup grammar error: {0}")]
    TagSoup(#[from] SgmlError),
    #[error("XML parsing error: {0}")]
    Xml(#[from] XmlError),
}
