//! Engine configuration.
//!
//! A [`Config`] is bound once into an [`Engine`](crate::Engine) and threaded
//! through every operation that inspects records or walks trees.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default annotation tag read on record fields.
pub const DEFAULT_TAG_NAME: &str = "arbor";

/// Default maximum container depth the walker descends into.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Default largest list index a write may pad a list up to.
pub const DEFAULT_MAX_LIST_INDEX: usize = 65_535;

/// Configuration for an [`Engine`](crate::Engine).
///
/// ```
/// use arbor::Config;
///
/// let config = Config::from_json_str(r#"{"tag_name": "json"}"#).unwrap();
/// assert_eq!(config.tag_name, "json");
/// assert_eq!(config.max_depth, arbor::config::DEFAULT_MAX_DEPTH);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Annotation tag looked up on record fields to rename or omit them.
    pub tag_name: String,
    /// Containers nested deeper than this are reported but not descended,
    /// and longer paths are neither read nor written.
    pub max_depth: usize,
    /// Writes through a list index above this are refused rather than
    /// padding the list.
    pub max_list_index: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag_name: DEFAULT_TAG_NAME.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_list_index: DEFAULT_MAX_LIST_INDEX,
        }
    }
}

impl Config {
    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    /// Parses a configuration from JSON, filling missing fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse { reason: e.to_string() })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tag_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "tag_name",
                reason: "must not be empty".to_string(),
            });
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid {
                field: "max_depth",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Errors raised while loading a [`Config`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed
    #[error("Failed to parse config: {reason}")]
    Parse { reason: String },

    /// A field holds an unusable value
    #[error("Invalid config field {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl From<ConfigError> for crate::Error {
    fn from(err: ConfigError) -> Self {
        crate::Error::Config(err)
    }
}
