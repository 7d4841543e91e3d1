//! Error types for value conversions.

use thiserror::Error;

use super::Value;

/// Errors raised when a [`Value`] cannot be converted into a concrete Rust type.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// The value has a different variant than the requested type
    #[error("Value type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// The record exposes no field with this name
    #[error("Record {record} has no exposed field '{field}'")]
    UnknownField { record: &'static str, field: String },

    /// The record refused the value written to one of its fields
    #[error("Record {record} rejected the value for field '{field}'")]
    FieldRejected { record: &'static str, field: String },
}

impl ValueError {
    pub(crate) fn mismatch(expected: &'static str, value: &Value) -> Self {
        ValueError::TypeMismatch {
            expected,
            actual: value.type_name(),
        }
    }

    /// Check if this error is a type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValueError::TypeMismatch { .. })
    }

    /// Check if this error is about a record field
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            ValueError::UnknownField { .. } | ValueError::FieldRejected { .. }
        )
    }
}

impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}
