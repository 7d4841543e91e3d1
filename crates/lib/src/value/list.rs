//! Ordered container type.

use std::{slice, vec};

use super::Value;

/// An ordered, 0-indexed collection of [`Value`]s.
///
/// ```
/// # use arbor::{List, Value};
/// let mut list = List::new();
/// list.push("a");
/// list.push(2);
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(1), Some(&Value::Int(2)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets an item by index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Gets a mutable reference to an item by index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Appends an item to the end of the list
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Appends `fill()` until the list holds at least `len` items
    pub fn pad_to(&mut self, len: usize, mut fill: impl FnMut() -> Value) {
        while self.items.len() < len {
            self.items.push(fill());
        }
    }

    /// Returns an iterator over the items
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Returns an iterator over mutable references to the items
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }

    /// Returns the items as a slice
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Builder-style push
    pub fn with(mut self, value: impl Into<Value>) -> Self {
        self.push(value);
        self
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
