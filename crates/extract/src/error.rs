use crate::scalar::ScalarKind;
use thiserror::Error;

/// A required field could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Required field '{field}' is missing from {parent}")]
    Missing { field: String, parent: String },

    #[error("Field '{field}' in {parent} has value '{raw}', which is not a valid {target}")]
    Unparsable {
        field: String,
        parent: String,
        raw: String,
        target: ScalarKind,
    },
}

impl FieldError {
    /// The name of the field the error is about.
    pub fn field(&self) -> &str {
        match self {
            FieldError::Missing { field, .. } | FieldError::Unparsable { field, .. } => field,
        }
    }
}
