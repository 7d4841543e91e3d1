//! Reading and writing leaves at a path.
//!
//! [`Engine::get`] resolves a path segment by segment and returns `None` as
//! soon as a segment cannot be resolved. [`Engine::set`] walks the same way
//! but creates missing intermediate containers on the fly
//! (auto-vivification), choosing a list when the *next* segment is an index
//! and a map otherwise.
//!
//! Writes are best-effort: a path that runs into a leaf, or indexes a list
//! with a non-numeric segment, leaves the tree untouched. Use
//! [`Engine::try_set`] to have those cases reported instead.
//!
//! Paths longer than [`Config::max_depth`](crate::Config::max_depth) are
//! neither read nor written, and a write never pads a list past
//! [`Config::max_list_index`](crate::Config::max_list_index).

use std::borrow::Cow;

use crate::{
    Engine, List, Map, PathBuf, Value,
    container::Container,
    path::{is_index, parse_index},
};

pub mod errors;

pub use errors::AccessError;

impl Engine {
    /// Resolves `path` against `tree`.
    ///
    /// An empty path returns `tree` itself. Map and list children are
    /// borrowed; values read from record fields are owned.
    ///
    /// ```
    /// use arbor::{Engine, Map, Value};
    ///
    /// let tree = Value::Map(Map::new().with("ports", 48));
    /// let engine = Engine::default();
    ///
    /// assert_eq!(engine.get(&tree, &["ports"]).as_deref(), Some(&Value::Int(48)));
    /// assert!(engine.get(&tree, &["ports", "0"]).is_none());
    /// ```
    pub fn get<'a, S: AsRef<str>>(&self, tree: &'a Value, path: &[S]) -> Option<Cow<'a, Value>> {
        if path.len() > self.config().max_depth {
            tracing::trace!(depth = path.len(), "path read beyond max_depth");
            return None;
        }
        let mut current = Cow::Borrowed(tree);
        for segment in path {
            let segment = segment.as_ref();
            current = match current {
                Cow::Borrowed(node) => Container::of(node, self.config())?.get(segment)?,
                Cow::Owned(node) => {
                    let child = Container::of(&node, self.config())?.get(segment)?;
                    Cow::Owned(child.into_owned())
                }
            };
        }
        Some(current)
    }

    /// Mutably resolves `path` through maps and lists.
    ///
    /// Record fields are produced by value and cannot be borrowed, so a path
    /// through a record resolves to `None`.
    pub fn get_mut<'a, S: AsRef<str>>(
        &self,
        tree: &'a mut Value,
        path: &[S],
    ) -> Option<&'a mut Value> {
        if path.len() > self.config().max_depth {
            return None;
        }
        let mut current = tree;
        for segment in path {
            let segment = segment.as_ref();
            let node = current;
            current = match node {
                Value::Map(map) => map.get_mut(segment)?,
                Value::List(list) => list.get_mut(parse_index(segment)?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Resolves `path`, returning `fallback` when it cannot be resolved.
    pub fn get_or<'a, S: AsRef<str>>(
        &self,
        tree: &'a Value,
        path: &[S],
        fallback: impl Into<Value>,
    ) -> Cow<'a, Value> {
        self.get(tree, path)
            .unwrap_or_else(|| Cow::Owned(fallback.into()))
    }

    /// Writes `value` at `path`, creating intermediate containers as needed.
    ///
    /// - a terminal segment under a list appends, whatever its number
    /// - a terminal segment under a map sets that key
    /// - a terminal segment under a record sets that field
    /// - a map entry on the way is replaced by an empty list if the next
    ///   segment is an index and it is not a list, or by an empty map if the
    ///   next segment is not an index and it is neither a map nor a record
    /// - an index segment past the end of a list pads it with empty maps
    ///
    /// Any other combination, and an empty path, leaves `tree` unchanged.
    ///
    /// ```
    /// use arbor::{Engine, Map, Value, path};
    ///
    /// let engine = Engine::default();
    /// let mut tree = Value::Map(Map::new());
    /// engine.set(&mut tree, &path!("devices", 1, "switch", 0, "name"), "sw0");
    ///
    /// let devices = engine.get(&tree, &["devices"]).unwrap();
    /// let devices = devices.as_list().unwrap();
    /// assert_eq!(devices.len(), 2);
    /// assert_eq!(devices.get(0), Some(&Value::Map(Map::new())));
    /// ```
    pub fn set<S: AsRef<str>>(&self, tree: &mut Value, path: &[S], value: impl Into<Value>) {
        if let Err(err) = self.try_set(tree, path, value) {
            tracing::trace!(%err, "path write absorbed");
        }
    }

    /// Like [`Engine::set`], but reports writes that could not be applied.
    ///
    /// An empty path is still a successful no-op. Containers created before
    /// the failing segment remain in the tree.
    pub fn try_set<S: AsRef<str>>(
        &self,
        tree: &mut Value,
        path: &[S],
        value: impl Into<Value>,
    ) -> Result<(), AccessError> {
        let max = self.config().max_depth;
        if path.len() > max {
            return Err(over_limit(path, max, "max_depth", max));
        }
        self.set_at(tree, path, 0, value.into())
    }

    fn set_at<S: AsRef<str>>(
        &self,
        node: &mut Value,
        path: &[S],
        pos: usize,
        value: Value,
    ) -> Result<(), AccessError> {
        let Some(segment) = path.get(pos).map(AsRef::as_ref) else {
            return Ok(());
        };
        let next = path.get(pos + 1).map(AsRef::as_ref);

        match node {
            Value::List(list) => {
                if next.is_none() {
                    list.push(value);
                    return Ok(());
                }
                let index = parse_index(segment).ok_or_else(|| mismatch(path, pos, "list"))?;
                let max = self.config().max_list_index;
                if index > max {
                    return Err(over_limit(path, pos, "max_list_index", max));
                }
                let len = index
                    .checked_add(1)
                    .ok_or_else(|| mismatch(path, pos, "list"))?;
                list.pad_to(len, || Value::Map(Map::new()));
                let child = list
                    .get_mut(index)
                    .ok_or_else(|| mismatch(path, pos, "list"))?;
                self.set_at(child, path, pos + 1, value)
            }
            Value::Map(map) => {
                let Some(next) = next else {
                    map.insert(segment, value);
                    return Ok(());
                };
                let entry = map.entry(segment).or_default();
                vivify(entry, next);
                self.set_at(entry, path, pos + 1, value)
            }
            Value::Record(record) => {
                let view = record.view(self.config());
                let rejected = |err| field_error(path, pos, err);

                let Some(next) = next else {
                    return view
                        .set(record.as_record_mut(), segment, value)
                        .map_err(rejected);
                };
                let mut child = view.get(record.as_record(), segment).ok_or_else(|| {
                    AccessError::UnknownField {
                        path: prefix(path, pos),
                        record: record.as_record().type_name(),
                        field: segment.to_string(),
                    }
                })?;
                vivify(&mut child, next);
                self.set_at(&mut child, path, pos + 1, value)?;
                view.set(record.as_record_mut(), segment, child)
                    .map_err(rejected)
            }
            leaf => Err(mismatch(path, pos, leaf.type_name())),
        }
    }
}

/// Replaces `entry` with an empty container matching the next segment.
fn vivify(entry: &mut Value, next: &str) {
    if is_index(next) {
        if !matches!(entry, Value::List(_)) {
            *entry = Value::List(List::new());
        }
    } else if !matches!(entry, Value::Map(_) | Value::Record(_)) {
        *entry = Value::Map(Map::new());
    }
}

fn prefix<S: AsRef<str>>(path: &[S], pos: usize) -> String {
    PathBuf::from_segments(path[..pos].iter().map(|s| s.as_ref().to_string())).to_string()
}

fn mismatch<S: AsRef<str>>(path: &[S], pos: usize, found: &'static str) -> AccessError {
    AccessError::ShapeMismatch {
        path: prefix(path, pos),
        segment: path[pos].as_ref().to_string(),
        found,
    }
}

fn over_limit<S: AsRef<str>>(path: &[S], pos: usize, limit: &'static str, max: usize) -> AccessError {
    AccessError::LimitExceeded {
        path: prefix(path, pos),
        segment: path[pos].as_ref().to_string(),
        limit,
        max,
    }
}

fn field_error<S: AsRef<str>>(path: &[S], pos: usize, err: crate::ValueError) -> AccessError {
    match err {
        crate::ValueError::UnknownField { record, field } => AccessError::UnknownField {
            path: prefix(path, pos),
            record,
            field,
        },
        crate::ValueError::FieldRejected { record, field } => AccessError::FieldRejected {
            path: prefix(path, pos),
            record,
            field,
        },
        other => AccessError::FieldRejected {
            path: prefix(path, pos),
            record: "record",
            field: other.to_string(),
        },
    }
}
