//! The error returned by the throwing `parse` entry points.

use thiserror::Error;

use super::{SchemaError, SchemaErrors};

/// Returned by [`SchemaLike::parse`](crate::SchemaLike::parse) and friends.
///
/// `Invalid` carries the complete error list of the underlying validation,
/// and its message is the flattened `path: message, path: message` summary.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{}", .0.flatten_messages())]
    Invalid(SchemaErrors),

    /// The input validated but did not fit the requested Rust type.
    #[error("validated value could not be deserialized: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl ParseError {
    /// Returns the validation errors, or `None` for a deserialization failure.
    pub fn errors(&self) -> Option<&SchemaErrors> {
        match self {
            ParseError::Invalid(errors) => Some(errors),
            ParseError::Deserialize(_) => None,
        }
    }

    /// Consumes the error and returns the individual validation errors.
    pub fn into_errors(self) -> Vec<SchemaError> {
        match self {
            ParseError::Invalid(errors) => errors.into_vec(),
            ParseError::Deserialize(_) => Vec::new(),
        }
    }
}

impl From<SchemaErrors> for ParseError {
    fn from(errors: SchemaErrors) -> Self {
        ParseError::Invalid(errors)
    }
}
