//! Conversion between nested trees and flat, path-keyed maps.
//!
//! *Coalescing* walks a tree and records every leaf under a key made by
//! joining its path; *diffusing* splits each key back into a path and sets
//! the value into a fresh tree.
//!
//! The typed variants carry each leaf's scalar kind in the key, so trees can
//! round-trip through storage that only holds strings:
//!
//! ```text
//! {"id": "top", "ports": [48, 24]}
//!     <=> {"str:id": "top", "int:ports.0": "48", "int:ports.1": "24"}
//! ```
//!
//! Failures in the typed variants are collected per key and returned with
//! the partial result; a conversion never stops early.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    Engine, Map, PathBuf, Value,
    path::compare_paths,
    scalar::{self, ScalarKind},
};

pub mod errors;

pub use errors::FlatError;

impl Engine {
    /// Builds a tree from flat keys split on `joiner`.
    ///
    /// Keys are applied in path order, comparing index segments numerically,
    /// so list elements are appended in index order. An empty joiner makes
    /// each key a single segment.
    ///
    /// ```
    /// use arbor::{Engine, List, Map, Value};
    ///
    /// let tree = Engine::default().diffuse_map([("id", "top"), ("tags.0", "a"), ("tags.1", "b")], ".");
    /// assert_eq!(
    ///     tree,
    ///     Value::Map(Map::new().with("id", "top").with("tags", List::new().with("a").with("b")))
    /// );
    /// ```
    pub fn diffuse_map<I, K, V>(&self, flat: I, joiner: &str) -> Value
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let entries = flat
            .into_iter()
            .map(|(key, value)| (PathBuf::split(key.as_ref(), joiner), value.into()));
        let (tree, count) = self.diffuse_sorted(entries);
        debug!(keys = count, joiner, "Diffused flat map");
        tree
    }

    /// Builds a tree from type-tagged flat keys.
    ///
    /// Each key is split on the last `type_sep` into a type tag and the
    /// joined path. A key without a separator (or an empty `type_sep`) is
    /// tagged `str`, as is an unknown tag. Values are coerced to the tagged
    /// kind; keys whose value cannot be coerced are skipped and reported.
    pub fn diffuse_map_typed<I, K, V>(
        &self,
        flat: I,
        joiner: &str,
        type_sep: &str,
    ) -> (Value, Vec<FlatError>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut errors = Vec::new();
        let mut entries = Vec::new();

        for (key, raw) in flat {
            let key = key.as_ref();
            let (tag, rest) = split_type_tag(key, type_sep);
            let kind = ScalarKind::from_tag(tag);

            match scalar::coerce(raw.into(), kind, self.clock()) {
                Ok(value) => entries.push((PathBuf::split(rest, joiner), value)),
                Err(source) => errors.push(FlatError::Coerce {
                    key: key.to_string(),
                    tag: tag.to_string(),
                    source,
                }),
            }
        }

        let (tree, count) = self.diffuse_sorted(entries);
        debug!(
            keys = count,
            errors = errors.len(),
            joiner,
            type_sep,
            "Diffused typed flat map"
        );
        (tree, errors)
    }

    /// Flattens `tree` into a map from joined leaf paths to leaves.
    ///
    /// A scalar root is stored under the empty key. Empty containers and
    /// `Null` leaves produce no keys.
    pub fn coalesce_map(&self, tree: &Value, joiner: &str) -> BTreeMap<String, Value> {
        let mut flat = BTreeMap::new();
        self.for_each_leaf(tree, |path, leaf| {
            flat.insert(path.join(joiner), leaf.clone());
        });
        debug!(keys = flat.len(), joiner, "Coalesced tree");
        flat
    }

    /// Flattens `tree` into type-tagged keys with text values.
    ///
    /// Each key is `{kind}{type_sep}{joined path}`, where the kind is
    /// detected from the leaf. Leaves without a text form are left out and
    /// reported.
    ///
    /// An empty `type_sep` writes no tag at all, matching
    /// [`Engine::diffuse_map_typed`], which reads such keys as untagged text.
    ///
    /// ```
    /// use arbor::{Engine, Map, Value};
    ///
    /// let tree = Value::Map(Map::new().with("id", "top").with("enabled", true));
    /// let (flat, errors) = Engine::default().coalesce_map_typed(&tree, ".", ":");
    ///
    /// assert!(errors.is_empty());
    /// assert_eq!(flat.get("str:id").map(String::as_str), Some("top"));
    /// assert_eq!(flat.get("bool:enabled").map(String::as_str), Some("true"));
    /// ```
    pub fn coalesce_map_typed(
        &self,
        tree: &Value,
        joiner: &str,
        type_sep: &str,
    ) -> (BTreeMap<String, String>, Vec<FlatError>) {
        let mut flat = BTreeMap::new();
        let mut errors = Vec::new();

        self.for_each_leaf(tree, |path, leaf| {
            let key = if type_sep.is_empty() {
                path.join(joiner)
            } else {
                format!("{}{}{}", scalar::detect(leaf), type_sep, path.join(joiner))
            };
            match scalar::format(leaf) {
                Ok(text) => {
                    flat.insert(key, text);
                }
                Err(source) => errors.push(FlatError::Stringify { key, source }),
            }
        });

        debug!(
            keys = flat.len(),
            errors = errors.len(),
            joiner,
            type_sep,
            "Coalesced tree with type tags"
        );
        (flat, errors)
    }

    fn diffuse_sorted(&self, entries: impl IntoIterator<Item = (PathBuf, Value)>) -> (Value, usize) {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| compare_paths(a, b));

        let count = entries.len();
        let mut tree = Value::Map(Map::new());
        for (path, value) in entries {
            self.set(&mut tree, &path, value);
        }
        (tree, count)
    }
}

/// Splits `key` into its type tag and the rest, on the last `type_sep`.
fn split_type_tag<'k>(key: &'k str, type_sep: &str) -> (&'k str, &'k str) {
    if type_sep.is_empty() {
        return (ScalarKind::Str.as_str(), key);
    }
    key.rsplit_once(type_sep)
        .unwrap_or((ScalarKind::Str.as_str(), key))
}
