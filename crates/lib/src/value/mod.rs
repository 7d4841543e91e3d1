//! Value types for semi-structured trees.
//!
//! This module provides the [`Value`] enum that represents every node a tree
//! can contain. Values are either leaves (scalars, text, timestamps, opaque
//! bytes) or containers (maps, lists and records). Containers are what the
//! path addressing, walker and flattening operations descend into.

use std::fmt;

use chrono::{DateTime, FixedOffset};

pub mod errors;
pub mod list;
pub mod map;
pub mod record;
mod serde_impl;

pub use errors::ValueError;
pub use list::List;
pub use map::Map;
pub use record::{FieldAnnotation, FieldDef, Record, RecordValue, RecordView};
pub use serde_impl::Configured;

/// A node in a semi-structured tree.
///
/// # Value Types
///
/// ## Leaf Values
/// - [`Value::Null`] - Absent/empty value, never visited by the walker
/// - [`Value::Bool`] - Boolean values
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Float`] - 64-bit floating point numbers
/// - [`Value::Text`] - UTF-8 strings
/// - [`Value::Time`] - Timestamps with a fixed UTC offset
/// - [`Value::Bytes`] - Opaque byte payloads
///
/// ## Container Values
/// - [`Value::Map`] - Unordered string-keyed collections
/// - [`Value::List`] - Ordered, 0-indexed collections
/// - [`Value::Record`] - Fixed-shape typed values exposed through [`Record`]
///
/// `Value` compares directly against primitives:
///
/// ```
/// # use arbor::Value;
/// let text = Value::Text("hello".to_string());
/// assert!(text == "hello");
/// assert!(Value::Int(42) == 42);
/// assert!(!(text == 42));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    // Leaf values
    /// Null/absent value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Timestamp value
    Time(DateTime<FixedOffset>),
    /// Opaque bytes
    Bytes(Vec<u8>),

    // Container values
    /// String-keyed collection of values
    Map(Map),
    /// Ordered collection of values
    List(List),
    /// Typed value exposing named fields
    Record(RecordValue),
}

impl Value {
    /// Returns true if this is a leaf value (cannot be descended into)
    pub fn is_leaf(&self) -> bool {
        !self.is_container()
    }

    /// Returns true if this is a map, list or record
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::List(_) | Value::Record(_))
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value is the zero value of its kind.
    ///
    /// Null, `false`, `0`, `0.0`, whitespace-only text, empty bytes and empty
    /// containers are considered empty.
    pub fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !*b,
            Value::Int(n) => *n == 0,
            Value::Float(f) => *f == 0.0,
            Value::Text(s) => s.trim().is_empty(),
            Value::Time(_) => false,
            Value::Bytes(b) => b.is_empty(),
            Value::Map(map) => map.is_empty(),
            Value::List(list) => list.is_empty(),
            Value::Record(_) => false,
        }
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Time(_) => "time",
            Value::Bytes(_) => "bytes",
            Value::Map(_) => "map",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a timestamp
    pub fn as_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::Time(t) => Some(t),
            _ => None,
        }
    }

    /// Attempts to convert to a map (returns immutable reference)
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable map reference
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a list (returns immutable reference)
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable list reference
    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a record
    pub fn as_record(&self) -> Option<&RecordValue> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Converts to a compact JSON string for display and debugging.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "null".to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Time(t) => write!(f, "{}", t.to_rfc3339()),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Value::Map(_) | Value::List(_) | Value::Record(_) => {
                write!(f, "{}", self.to_json_string())
            }
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Time(value)
    }
}

impl From<DateTime<chrono::Utc>> for Value {
    fn from(value: DateTime<chrono::Utc>) -> Self {
        Value::Time(value.fixed_offset())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<List> for Value {
    fn from(value: List) -> Self {
        Value::List(value)
    }
}

impl From<RecordValue> for Value {
    fn from(value: RecordValue) -> Self {
        Value::Record(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// TryFrom implementations used by record field setters and typed accessors
impl TryFrom<&Value> for String {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(ValueError::mismatch("String", value)),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = ValueError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(ValueError::mismatch("&str", value)),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(ValueError::mismatch("i64", value)),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(f) => Ok(*f),
            Value::Int(n) => Ok(*n as f64),
            _ => Err(ValueError::mismatch("f64", value)),
        }
    }
}

impl TryFrom<&Value> for bool {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(ValueError::mismatch("bool", value)),
        }
    }
}

impl TryFrom<&Value> for DateTime<FixedOffset> {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Time(t) => Ok(*t),
            _ => Err(ValueError::mismatch("DateTime", value)),
        }
    }
}

impl TryFrom<&Value> for Vec<u8> {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bytes(b) => Ok(b.clone()),
            _ => Err(ValueError::mismatch("Vec<u8>", value)),
        }
    }
}

impl TryFrom<&Value> for Map {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Map(map) => Ok(map.clone()),
            _ => Err(ValueError::mismatch("Map", value)),
        }
    }
}

impl TryFrom<&Value> for List {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(list) => Ok(list.clone()),
            _ => Err(ValueError::mismatch("List", value)),
        }
    }
}

impl TryFrom<&Value> for Value {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Ok(value.clone())
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        match self {
            Value::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        match self {
            Value::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        match self {
            Value::Int(n) => *n == *other as i64,
            _ => false,
        }
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        match self {
            Value::Float(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        match self {
            Value::Bool(b) => b == other,
            _ => false,
        }
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}

impl PartialEq<Value> for String {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
