//! The reusable entry point bundling configuration and a clock.
//!
//! Every tree operation is a method on [`Engine`]. The methods live next to
//! the component they belong to (`access`, `walk`, `transform`, `flat`,
//! `merge`); this module only holds the shared state.

use std::sync::Arc;

use crate::{Clock, Config, Configured, SystemClock, Value, scalar};

/// Path addressing, traversal and flattening bound to one [`Config`].
///
/// An engine holds no tree state; it can be shared freely and every call is
/// independent.
///
/// ```
/// use arbor::{Engine, Value, path};
///
/// let engine = Engine::default();
/// let mut tree = Value::Map(Default::default());
/// engine.set(&mut tree, &path!("devices", 0, "name"), "sw0");
///
/// assert_eq!(
///     engine.get(&tree, &path!("devices", 0, "name")).as_deref(),
///     Some(&Value::from("sw0"))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    config: Config,
    clock: Arc<dyn Clock>,
}

impl Engine {
    /// Creates an engine reading time from the system clock.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates an engine with an explicit time source.
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// The bound configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The bound time source.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Parses `text` as a `kind` scalar using this engine's clock.
    pub fn parse_scalar(
        &self,
        text: &str,
        kind: scalar::ScalarKind,
    ) -> Result<Value, scalar::ScalarError> {
        scalar::parse(text, kind, self.clock())
    }

    /// Formats a leaf as text.
    pub fn format_scalar(&self, value: &Value) -> Result<String, scalar::ScalarError> {
        scalar::format(value)
    }

    /// Wraps `value` so records serialize under this engine's tag.
    pub fn serializable<'a>(&'a self, value: &'a Value) -> Configured<'a> {
        Configured::new(value, &self.config)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
