//! Uniform read access to maps, lists and records.
//!
//! [`Container`] hides which kind of container backs a node, so path lookup
//! and the walker only deal with segments and child values. Children of maps
//! and lists are borrowed; record fields are produced by value, which is why
//! lookups return a [`Cow`].

use std::borrow::Cow;

use crate::{
    Config, List, Map, Value,
    path::parse_index,
    value::{Record, RecordView},
};

/// A read-only view over any container node.
pub enum Container<'a> {
    Map(&'a Map),
    List(&'a List),
    Record(&'a dyn Record, RecordView),
}

impl<'a> Container<'a> {
    /// Returns the container view of `value`, or `None` for leaves.
    pub fn of(value: &'a Value, config: &Config) -> Option<Self> {
        match value {
            Value::Map(map) => Some(Container::Map(map)),
            Value::List(list) => Some(Container::List(list)),
            Value::Record(record) => {
                let view = record.view(config);
                Some(Container::Record(record.as_record(), view))
            }
            _ => None,
        }
    }

    /// Name of the container kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Container::Map(_) => "map",
            Container::List(_) => "list",
            Container::Record(..) => "record",
        }
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        match self {
            Container::Map(map) => map.len(),
            Container::List(list) => list.len(),
            Container::Record(_, view) => view.len(),
        }
    }

    /// Returns `true` if the container has no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Segments addressing each child.
    ///
    /// Lists yield their indexes in order, records their exposed names in
    /// declaration order, and maps their keys in unspecified order.
    pub fn segments(&self) -> Vec<String> {
        match self {
            Container::Map(map) => map.keys().cloned().collect(),
            Container::List(list) => (0..list.len()).map(|i| i.to_string()).collect(),
            Container::Record(_, view) => view.names().map(str::to_string).collect(),
        }
    }

    /// Resolves one segment against this container.
    pub fn get(&self, segment: &str) -> Option<Cow<'a, Value>> {
        match self {
            Container::Map(map) => map.get(segment).map(Cow::Borrowed),
            Container::List(list) => list.get(parse_index(segment)?).map(Cow::Borrowed),
            Container::Record(record, view) => view.get(*record, segment).map(Cow::Owned),
        }
    }

    /// Every child with its segment.
    pub fn entries(&self) -> Vec<(String, Cow<'a, Value>)> {
        match self {
            Container::Map(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), Cow::Borrowed(v)))
                .collect(),
            Container::List(list) => list
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), Cow::Borrowed(v)))
                .collect(),
            Container::Record(record, view) => view
                .names()
                .filter_map(|name| {
                    view.get(*record, name)
                        .map(|v| (name.to_string(), Cow::Owned(v)))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaves_have_no_container() {
        let config = Config::default();
        assert!(Container::of(&Value::Int(1), &config).is_none());
        assert!(Container::of(&Value::Null, &config).is_none());
    }

    #[test]
    fn test_list_segments_and_lookup() {
        let config = Config::default();
        let value = Value::List(List::new().with("a").with("b"));
        let container = Container::of(&value, &config).unwrap();

        assert_eq!(container.kind(), "list");
        assert_eq!(container.segments(), vec!["0", "1"]);
        assert_eq!(container.get("1").as_deref(), Some(&Value::from("b")));
        assert!(container.get("2").is_none());
        assert!(container.get("x").is_none());
        assert!(container.get("-1").is_none());
    }

    #[test]
    fn test_map_lookup_borrows() {
        let config = Config::default();
        let value = Value::Map(Map::new().with("k", 1));
        let container = Container::of(&value, &config).unwrap();

        assert!(matches!(container.get("k"), Some(Cow::Borrowed(_))));
        assert_eq!(container.entries().len(), 1);
    }
}
