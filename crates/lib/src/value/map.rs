//! String-keyed container type.

use std::collections::{HashMap, hash_map};

use super::Value;

/// An unordered collection of string keys to [`Value`]s.
///
/// Iteration order is unspecified. Callers that need a stable order should
/// sort the keys themselves.
///
/// ```
/// # use arbor::{Map, Value};
/// let map = Map::new().with("name", "sw0").with("ports", 48);
///
/// assert_eq!(map.get("name"), Some(&Value::from("sw0")));
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    entries: HashMap<String, Value>,
}

impl Map {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map contains the given key
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    /// Gets a value by key
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.entries.get(key.as_ref())
    }

    /// Gets a mutable reference to a value by key
    pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut Value> {
        self.entries.get_mut(key.as_ref())
    }

    /// Sets a value, returning the previous value if present
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes a value by key
    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<Value> {
        self.entries.remove(key.as_ref())
    }

    /// Returns the entry for in-place manipulation
    pub fn entry(&mut self, key: impl Into<String>) -> hash_map::Entry<'_, String, Value> {
        self.entries.entry(key.into())
    }

    /// Returns an iterator over all key-value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Returns an iterator over all key-value pairs with mutable values
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over all keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Returns an iterator over all values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
