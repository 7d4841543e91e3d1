//! Error types for scalar conversion.

use thiserror::Error;

use super::ScalarKind;

/// Errors raised while converting between text and scalar values.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScalarError {
    /// Text could not be parsed as the requested kind
    #[error("Cannot parse {input:?} as {kind}: {reason}")]
    Parse {
        kind: ScalarKind,
        input: String,
        reason: String,
    },

    /// A value has no text representation
    #[error("Cannot format {type_name} value as text: {reason}")]
    Format {
        type_name: &'static str,
        reason: String,
    },

    /// A type tag does not name a scalar kind
    #[error("Unknown scalar type tag '{tag}'")]
    UnknownTag { tag: String },
}

impl ScalarError {
    /// Check if this error came from parsing text
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ScalarError::Parse { .. })
    }

    /// Check if this error came from formatting a value
    pub fn is_format_error(&self) -> bool {
        matches!(self, ScalarError::Format { .. })
    }

    /// Get the target kind if this is a parse error
    pub fn kind(&self) -> Option<ScalarKind> {
        match self {
            ScalarError::Parse { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<ScalarError> for crate::Error {
    fn from(err: ScalarError) -> Self {
        crate::Error::Scalar(err)
    }
}
