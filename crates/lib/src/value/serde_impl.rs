//! Serde support for [`Value`], [`Map`] and [`List`].
//!
//! Values serialize to the JSON data model: timestamps become RFC 3339
//! strings and records become objects of their exposed fields. The plain
//! `Serialize` impls read record annotations under the default [`Config`];
//! [`Configured`] serializes under a specific one. Deserialization never
//! produces timestamps, bytes from text formats, or records.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, SeqAccess, Visitor},
    ser::SerializeMap,
};

use super::{List, Map, RecordValue, Value};
use crate::Config;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Time(t) => serializer.serialize_str(&t.to_rfc3339()),
            Value::Bytes(b) => serializer.serialize_bytes(b),
            Value::Map(map) => map.serialize(serializer),
            Value::List(list) => list.serialize(serializer),
            Value::Record(record) => record.serialize(serializer),
        }
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            out.serialize_entry(key, value)?;
        }
        out.end()
    }
}

impl Serialize for List {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl Serialize for RecordValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_record(self, &Config::default(), serializer)
    }
}

/// A [`Value`] serialized with record annotations read under `config`.
///
/// ```
/// use arbor::{Config, Configured, Map, Value};
///
/// let tree = Value::Map(Map::new().with("id", "top"));
/// let config = Config::default();
/// let json = serde_json::to_string(&Configured::new(&tree, &config)).unwrap();
/// assert_eq!(json, r#"{"id":"top"}"#);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Configured<'a> {
    value: &'a Value,
    config: &'a Config,
}

impl<'a> Configured<'a> {
    pub fn new(value: &'a Value, config: &'a Config) -> Self {
        Self { value, config }
    }
}

impl Serialize for Configured<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    out.serialize_entry(key, &Configured::new(value, self.config))?;
                }
                out.end()
            }
            Value::List(list) => serializer.collect_seq(
                list.iter()
                    .map(|value| Configured::new(value, self.config)),
            ),
            Value::Record(record) => serialize_record(record, self.config, serializer),
            leaf => leaf.serialize(serializer),
        }
    }
}

fn serialize_record<S: Serializer>(
    record: &RecordValue,
    config: &Config,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let inner = record.as_record();
    let view = record.view(config);
    let mut out = serializer.serialize_map(Some(view.len()))?;
    for name in view.names() {
        let value = view.get(inner, name).unwrap_or_default();
        out.serialize_entry(name, &Configured::new(&value, config))?;
    }
    out.end()
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON-like value")
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(i64::try_from(v).map_or(Value::Float(v as f64), Value::Int))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::Text(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::Text(v))
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Value, E> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Value, E> {
        Ok(Value::Bytes(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut list = List::new();
        while let Some(item) = seq.next_element::<Value>()? {
            list.push(item);
        }
        Ok(Value::List(list))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Value, A::Error> {
        let mut map = Map::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            map.insert(key, value);
        }
        Ok(Value::Map(map))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for Map {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Map(map) => Ok(map),
            other => Err(serde::de::Error::custom(format!(
                "expected a map, found {}",
                other.type_name()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for List {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::List(list) => Ok(list),
            other => Err(serde::de::Error::custom(format!(
                "expected a list, found {}",
                other.type_name()
            ))),
        }
    }
}
