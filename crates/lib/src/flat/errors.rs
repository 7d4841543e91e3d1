//! Error types for typed flattening.

use thiserror::Error;

use crate::scalar::ScalarError;

/// A per-key failure collected by the typed flat conversions.
///
/// These never stop a conversion; they are returned next to the partial
/// result, one per skipped key.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlatError {
    /// A flat value could not be converted to its tagged type
    #[error("Cannot coerce key '{key}' to {tag}: {source}")]
    Coerce {
        key: String,
        tag: String,
        #[source]
        source: ScalarError,
    },

    /// A leaf has no text form, so its key was left out
    #[error("Cannot stringify leaf for key '{key}': {source}")]
    Stringify {
        key: String,
        #[source]
        source: ScalarError,
    },
}

impl FlatError {
    /// Get the flat key this error refers to
    pub fn key(&self) -> &str {
        match self {
            FlatError::Coerce { key, .. } | FlatError::Stringify { key, .. } => key,
        }
    }

    /// Check if this error came from diffusing
    pub fn is_coerce_error(&self) -> bool {
        matches!(self, FlatError::Coerce { .. })
    }

    /// Check if this error came from coalescing
    pub fn is_stringify_error(&self) -> bool {
        matches!(self, FlatError::Stringify { .. })
    }
}

impl From<FlatError> for crate::Error {
    fn from(err: FlatError) -> Self {
        crate::Error::Flat(err)
    }
}
