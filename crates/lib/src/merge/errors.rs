//! Error types for structural merge.

use thiserror::Error;

/// Errors that stop a merge before any output is produced.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// One of the inputs is neither a map, a record nor absent
    #[error("Cannot merge: {side} tree is a {found}, expected a map")]
    RootNotMap {
        side: &'static str,
        found: &'static str,
    },
}

impl MergeError {
    /// Check if this error is about an input's root shape
    pub fn is_root_error(&self) -> bool {
        matches!(self, MergeError::RootNotMap { .. })
    }
}

impl From<MergeError> for crate::Error {
    fn from(err: MergeError) -> Self {
        crate::Error::Merge(err)
    }
}
