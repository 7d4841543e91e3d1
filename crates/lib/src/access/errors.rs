//! Error types for strict path writes.

use thiserror::Error;

/// Reasons a strict write could not be applied.
///
/// The permissive [`Engine::set`](crate::Engine::set) absorbs every one of
/// these; [`Engine::try_set`](crate::Engine::try_set) reports them.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The node reached cannot be addressed by the next segment
    #[error("Cannot address {found} with segment '{segment}' at {path}")]
    ShapeMismatch {
        path: String,
        segment: String,
        found: &'static str,
    },

    /// The record exposes no field with this name
    #[error("Record {record} has no field '{field}' at {path}")]
    UnknownField {
        path: String,
        record: &'static str,
        field: String,
    },

    /// The record refused the written value
    #[error("Record {record} rejected the value for '{field}' at {path}")]
    FieldRejected {
        path: String,
        record: &'static str,
        field: String,
    },

    /// The write would exceed a configured limit
    #[error("Segment '{segment}' at {path} exceeds {limit} ({max})")]
    LimitExceeded {
        path: String,
        segment: String,
        limit: &'static str,
        max: usize,
    },
}

impl AccessError {
    /// Get the path (up to the failing node) this error refers to
    pub fn path(&self) -> &str {
        match self {
            AccessError::ShapeMismatch { path, .. }
            | AccessError::UnknownField { path, .. }
            | AccessError::FieldRejected { path, .. }
            | AccessError::LimitExceeded { path, .. } => path,
        }
    }

    /// Check if this error is a shape mismatch
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, AccessError::ShapeMismatch { .. })
    }

    /// Check if this error is a refused oversized index or path
    pub fn is_limit_exceeded(&self) -> bool {
        matches!(self, AccessError::LimitExceeded { .. })
    }

    /// Check if this error involves a record field
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            AccessError::UnknownField { .. } | AccessError::FieldRejected { .. }
        )
    }
}

impl From<AccessError> for crate::Error {
    fn from(err: AccessError) -> Self {
        crate::Error::Access(err)
    }
}
