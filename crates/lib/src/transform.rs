//! Per-leaf rewrites built on the walker.
//!
//! Each operation walks the input, visits only leaves, and writes the
//! (possibly transformed) leaf into a fresh output tree with
//! [`Engine::set`]. The output root is a map for map and record inputs and a
//! list for list inputs. Records are therefore flattened into plain maps.

use crate::{Engine, List, Map, PathBuf, Value, scalar};

impl Engine {
    /// Rebuilds `tree` with `f` applied to every leaf.
    ///
    /// `f` returns `Some(new)` to write `new` in place of the leaf, or `None`
    /// to keep the leaf unchanged. A scalar root is passed to `f` with an
    /// empty path.
    ///
    /// ```
    /// use arbor::{Engine, List, Map, Value};
    ///
    /// let tree = Value::Map(Map::new().with("xs", List::new().with(1).with(2)));
    /// let doubled = Engine::default().apply(&tree, |_, leaf| {
    ///     leaf.as_int().map(|n| Value::Int(n * 2))
    /// });
    ///
    /// assert_eq!(doubled, Value::Map(Map::new().with("xs", List::new().with(2).with(4))));
    /// ```
    pub fn apply<F>(&self, tree: &Value, mut f: F) -> Value
    where
        F: FnMut(&PathBuf, &Value) -> Option<Value>,
    {
        self.rebuild(tree, |path, leaf| {
            Some(f(path, leaf).unwrap_or_else(|| leaf.clone()))
        })
    }

    /// Rebuilds `tree` without its empty leaves.
    ///
    /// Empty means `false`, zero, blank text or empty bytes. Containers left
    /// without leaves disappear as well, since only leaves are copied.
    pub fn compact(&self, tree: &Value) -> Value {
        self.rebuild(tree, |_, leaf| {
            (!leaf.is_empty_value()).then(|| leaf.clone())
        })
    }

    /// Rebuilds `tree` with every leaf replaced by its text form.
    ///
    /// Leaves without a text form (invalid UTF-8 bytes) are kept as they are.
    pub fn stringify(&self, tree: &Value) -> Value {
        self.apply(tree, |path, leaf| match scalar::format(leaf) {
            Ok(text) => Some(Value::Text(text)),
            Err(err) => {
                tracing::trace!(path = %path, %err, "Leaf kept as is");
                None
            }
        })
    }

    /// Rebuilds `tree` with text leaves converted to the scalar they look
    /// like: integer, float, boolean or timestamp, in that order.
    ///
    /// ```
    /// use arbor::{Engine, Map, Value};
    ///
    /// let tree = Value::Map(Map::new().with("ports", "48").with("up", "true").with("name", "sw0"));
    /// let typed = Engine::default().autotype(&tree);
    ///
    /// let typed = typed.as_map().unwrap();
    /// assert_eq!(typed.get("ports"), Some(&Value::Int(48)));
    /// assert_eq!(typed.get("up"), Some(&Value::Bool(true)));
    /// assert_eq!(typed.get("name"), Some(&Value::from("sw0")));
    /// ```
    pub fn autotype(&self, tree: &Value) -> Value {
        self.apply(tree, |_, leaf| leaf.as_text().and_then(scalar::autodetect))
    }

    /// Walks the leaves of `tree` and sets whatever `f` returns for each into
    /// a fresh tree. `None` drops the leaf.
    fn rebuild<F>(&self, tree: &Value, mut f: F) -> Value
    where
        F: FnMut(&PathBuf, &Value) -> Option<Value>,
    {
        let mut output = match tree {
            Value::Null => return Value::Null,
            Value::Map(_) | Value::Record(_) => Value::Map(Map::new()),
            Value::List(_) => Value::List(List::new()),
            leaf => return f(&PathBuf::new(), leaf).unwrap_or_default(),
        };

        self.for_each_leaf(tree, |path, leaf| {
            if let Some(value) = f(path, leaf) {
                self.set(&mut output, path, value);
            }
        });
        output
    }
}
