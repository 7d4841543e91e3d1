//! Deep merge of two trees.
//!
//! Every leaf of the first tree is copied into a fresh map. The leaves of
//! the second tree are then merged in one at a time:
//!
//! - nothing at that path yet: the leaf is written
//! - a list at that path: the leaf is appended to it
//! - an equal leaf: nothing changes
//! - a different leaf: both are kept, replaced by the list `[existing, new]`
//!
//! Merging more values into a path that already holds a conflict list keeps
//! appending to it, so repeated merges accumulate rather than nest. `Null`
//! leaves carry no information and are never merged.

use tracing::debug;

use crate::{Engine, List, Map, Value};

pub mod errors;

pub use errors::MergeError;

impl Engine {
    /// Merges `second` into a copy of `first`.
    ///
    /// Both roots must be maps, records or `Null`; anything else fails with
    /// [`MergeError::RootNotMap`] before any work is done. Records are read
    /// through their exposed fields, and the output is always a plain map.
    ///
    /// ```
    /// use arbor::{Engine, List, Map, Value};
    ///
    /// let engine = Engine::default();
    /// let first = Value::Map(Map::new().with("a", 1).with("b", "x"));
    /// let second = Value::Map(Map::new().with("a", 2).with("b", "x"));
    ///
    /// let merged = engine.merge(&first, &second).unwrap();
    /// assert_eq!(
    ///     merged,
    ///     Value::Map(Map::new().with("a", List::new().with(1).with(2)).with("b", "x"))
    /// );
    /// ```
    pub fn merge(&self, first: &Value, second: &Value) -> Result<Value, MergeError> {
        check_root("first", first)?;
        check_root("second", second)?;

        let mut output = Value::Map(Map::new());
        self.for_each_leaf(first, |path, leaf| {
            self.set(&mut output, path, leaf.clone());
        });

        let mut conflicts = 0usize;
        self.for_each_leaf(second, |path, leaf| {
            let Some(existing) = self.get_mut(&mut output, path) else {
                self.set(&mut output, path, leaf.clone());
                return;
            };

            match existing {
                Value::List(list) => list.push(leaf.clone()),
                same if same == leaf => {}
                conflict => {
                    conflicts += 1;
                    let previous = std::mem::take(conflict);
                    *conflict = Value::List(List::new().with(previous).with(leaf.clone()));
                }
            }
        });

        debug!(conflicts, "Merged trees");
        Ok(output)
    }
}

fn check_root(side: &'static str, root: &Value) -> Result<(), MergeError> {
    match root {
        Value::Null | Value::Map(_) | Value::Record(_) => Ok(()),
        other => Err(MergeError::RootNotMap {
            side,
            found: other.type_name(),
        }),
    }
}
