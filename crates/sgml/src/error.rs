use thiserror::Error;

/// Fatal grammar errors raised while reading a tag-soup document.
///
/// Line numbers are 1-based and count every physical line of the input,
/// header lines included.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SgmlError {
    #[error("Malformed header line {line}: '{text}'")]
    MalformedHeader { line: usize, text: String },

    #[error("Unrecognized tag fragment '{fragment}' at line {line}")]
    UnrecognizedFragment { line: usize, fragment: String },

    #[error(
        "Closing tag </{tag}> at line {line} matches neither the open aggregate <{}> nor the last value <{}>",
        .open.as_deref().unwrap_or("none"),
        .last_value.as_deref().unwrap_or("none")
    )]
    MismatchedClosingTag {
        line: usize,
        tag: String,
        open: Option<String>,
        last_value: Option<String>,
    },

    #[error("Tag <{tag}> at line {line} lies outside the root element")]
    OutsideRoot { line: usize, tag: String },
}
