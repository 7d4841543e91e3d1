//!
//! Arbor: path addressing, traversal and flat/nested conversion for
//! semi-structured trees.
//!
//! Arbor works on trees whose shape is only known at runtime, such as
//! decoded configuration or API payloads, and lets callers address, visit
//! and reshape them without writing navigation code for each shape.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: A tree node. Either a leaf (bool, number,
//!   text, timestamp, bytes) or a container: a map, a list, or a record.
//! * **Records (`value::Record`)**: Fixed-shape Rust types exposed as named
//!   fields, honoring visibility, per-field annotations and embedding.
//! * **Paths (`path::PathBuf`)**: Ordered string segments naming map keys,
//!   list indexes or record fields.
//! * **Engine (`engine::Engine`)**: Binds a [`Config`] and a [`Clock`] and
//!   carries every tree operation:
//!     * **Access**: `get` / `set` with auto-vivification of missing
//!       containers, plus a strict `try_set`.
//!     * **Walk**: depth-first traversal with subtree pruning and early abort.
//!     * **Transform**: `compact`, `apply`, `stringify`, `autotype`.
//!     * **Flat**: `coalesce_map` / `diffuse_map` between nested trees and
//!       path-keyed maps, optionally with type tags in the keys.
//!     * **Merge**: deep merge with conflicts accumulated into lists.
//! * **Scalars (`scalar`)**: Text conversion for the `str`, `bool`, `int`,
//!   `float` and `time` kinds used by the typed flat forms.

pub mod access;
pub mod clock;
pub mod config;
pub mod container;
pub mod engine;
pub mod flat;
pub mod merge;
pub mod path;
pub mod scalar;
pub mod transform;
pub mod value;
pub mod walk;

pub use access::AccessError;
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use clock::{Clock, SystemClock};
pub use config::{Config, ConfigError};
pub use container::Container;
pub use engine::Engine;
pub use flat::FlatError;
pub use merge::MergeError;
pub use path::PathBuf;
pub use scalar::{ScalarError, ScalarKind};
pub use value::{
    Configured, FieldAnnotation, FieldDef, List, Map, Record, RecordValue, RecordView, Value,
    ValueError,
};
pub use walk::Visit;

/// Result type used throughout the Arbor library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Arbor library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from strict path writes
    #[error(transparent)]
    Access(access::AccessError),

    /// Structured errors from the config module
    #[error(transparent)]
    Config(config::ConfigError),

    /// Structured errors from typed flattening
    #[error(transparent)]
    Flat(flat::FlatError),

    /// Structured errors from the merge module
    #[error(transparent)]
    Merge(merge::MergeError),

    /// Structured errors from scalar conversion
    #[error(transparent)]
    Scalar(scalar::ScalarError),

    /// Structured errors from value conversion
    #[error(transparent)]
    Value(value::ValueError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Access(_) => "access",
            Error::Config(_) => "config",
            Error::Flat(_) => "flat",
            Error::Merge(_) => "merge",
            Error::Scalar(_) => "scalar",
            Error::Value(_) => "value",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error is about a tree having the wrong shape.
    pub fn is_shape_error(&self) -> bool {
        match self {
            Error::Access(access_err) => {
                access_err.is_shape_mismatch() || access_err.is_limit_exceeded()
            }
            Error::Merge(merge_err) => merge_err.is_root_error(),
            Error::Value(value_err) => value_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error comes from converting text to or from a scalar.
    pub fn is_conversion_error(&self) -> bool {
        matches!(self, Error::Scalar(_) | Error::Flat(_))
    }

    /// Check if this error involves a record field.
    pub fn is_field_error(&self) -> bool {
        match self {
            Error::Access(access_err) => access_err.is_field_error(),
            Error::Value(value_err) => value_err.is_field_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
