//! Fixed-shape typed values exposed as named fields.
//!
//! Rust has no runtime reflection, so a type opts into being treated as a
//! tree container by implementing [`Record`]. The record describes its
//! fields in declaration order through [`FieldDef`]s and converts each field
//! to and from a [`Value`] by index.
//!
//! How fields are *exposed* (which names the path addressing and walker see)
//! is decided by [`RecordView`], using the annotation tag configured in
//! [`Config::tag_name`](crate::Config::tag_name):
//!
//! - non-exported fields are hidden
//! - an annotation `"alt"` exposes the field as `alt`
//! - an annotation `"-"` or one carrying the `omit` directive hides the field
//! - an embedded field holding a record promotes that record's fields into
//!   the parent, without a path segment of its own
//!
//! # Example
//!
//! ```
//! use arbor::{Config, RecordValue, RecordView, impl_record};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Port {
//!     name: String,
//!     speed: i64,
//! }
//!
//! impl_record!(Port { name, speed => "arbor": "mbps" });
//!
//! let port = RecordValue::new(Port { name: "eth0".into(), speed: 1000 });
//! let view = RecordView::new(port.as_record(), &Config::default());
//!
//! assert_eq!(view.names().collect::<Vec<_>>(), vec!["name", "mbps"]);
//! ```

use std::{any::Any, fmt};

use super::{Value, ValueError};
use crate::Config;

/// Static description of one declared field of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Declared field name
    pub name: &'static str,
    /// Whether the field is visible outside its type
    pub exported: bool,
    /// Whether the field is an embedded record whose fields are promoted
    pub embedded: bool,
    /// Metadata annotations as `(tag, value)` pairs
    pub annotations: &'static [(&'static str, &'static str)],
}

impl FieldDef {
    /// An exported, non-embedded field without annotations.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            exported: true,
            embedded: false,
            annotations: &[],
        }
    }

    /// Marks the field as not exported.
    pub const fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Marks the field as an embedded record.
    pub const fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Attaches metadata annotations.
    pub const fn annotated(mut self, annotations: &'static [(&'static str, &'static str)]) -> Self {
        self.annotations = annotations;
        self
    }

    /// Returns the raw annotation stored under `tag`, if any.
    pub fn annotation(&self, tag: &str) -> Option<&'static str> {
        self.annotations
            .iter()
            .find(|(key, _)| *key == tag)
            .map(|(_, value)| *value)
    }
}

/// A parsed field annotation of the form `"name,directive,..."`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAnnotation {
    /// Alternate exposed name, if one was given
    pub rename: Option<String>,
    /// Whether the field is hidden
    pub omit: bool,
    /// Every directive after the name
    pub directives: Vec<String>,
}

impl FieldAnnotation {
    /// Parses an annotation value.
    ///
    /// ```
    /// # use arbor::FieldAnnotation;
    /// let ann = FieldAnnotation::parse("mbps,readonly");
    /// assert_eq!(ann.rename.as_deref(), Some("mbps"));
    /// assert!(!ann.omit);
    ///
    /// assert!(FieldAnnotation::parse("-").omit);
    /// assert!(FieldAnnotation::parse(",omit").omit);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split(',').map(str::trim);
        let name = parts.next().unwrap_or_default();
        let directives: Vec<String> = parts
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .collect();

        let omit = name == "-" || directives.iter().any(|d| d == "omit");
        let rename = match name {
            "" | "-" => None,
            other => Some(other.to_string()),
        };

        Self {
            rename,
            omit,
            directives,
        }
    }
}

/// A fixed-shape value whose fields can be read and written by index.
///
/// Fields cannot be added or removed, but their values are mutable through
/// [`Record::set_field`]. Most types implement this with [`impl_record!`](crate::impl_record).
pub trait Record: fmt::Debug + Send + Sync {
    /// Name of the concrete type, used for equality and diagnostics.
    fn type_name(&self) -> &'static str;

    /// Declared fields, in declaration order.
    fn fields(&self) -> &'static [FieldDef];

    /// Returns the value of the field at `index`.
    fn get_field(&self, index: usize) -> Option<Value>;

    /// Replaces the value of the field at `index`.
    ///
    /// Returns `false` if the index is unknown or the value cannot be
    /// converted into the field's type.
    fn set_field(&mut self, index: usize, value: Value) -> bool;

    /// Clones the record behind a fresh box.
    fn clone_record(&self) -> Box<dyn Record>;

    /// Upcast used for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// Owned, clonable handle to a [`Record`] stored inside a [`Value`].
pub struct RecordValue(Box<dyn Record>);

impl RecordValue {
    /// Wraps a record.
    pub fn new(record: impl Record + 'static) -> Self {
        Self(Box::new(record))
    }

    /// Wraps an already boxed record.
    pub fn from_box(record: Box<dyn Record>) -> Self {
        Self(record)
    }

    /// Borrows the record.
    pub fn as_record(&self) -> &dyn Record {
        self.0.as_ref()
    }

    /// Mutably borrows the record.
    pub fn as_record_mut(&mut self) -> &mut dyn Record {
        self.0.as_mut()
    }

    /// Returns the concrete record if it is a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Builds the exposed-field view of this record.
    pub fn view(&self, config: &Config) -> RecordView {
        RecordView::new(self.as_record(), config)
    }
}

impl Clone for RecordValue {
    fn clone(&self) -> Self {
        Self(self.0.clone_record())
    }
}

impl fmt::Debug for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl PartialEq for RecordValue {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.as_record(), other.as_record());
        a.type_name() == b.type_name()
            && a.fields().len() == b.fields().len()
            && (0..a.fields().len()).all(|i| a.get_field(i) == b.get_field(i))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ExposedField {
    name: String,
    /// Field indexes from the outer record down through embedded records
    route: Vec<usize>,
}

/// The exposed-field view of a [`Record`] under a given [`Config`].
///
/// The view is computed from the record's current contents (embedded fields
/// must be inspected to be promoted) and is only valid for that record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    fields: Vec<ExposedField>,
}

impl RecordView {
    /// Computes the exposed fields of `record`.
    pub fn new(record: &dyn Record, config: &Config) -> Self {
        let mut candidates = Vec::new();
        collect_fields(record, config, &[], &mut candidates);

        // A shallower field shadows a promoted one of the same name.
        let mut fields: Vec<ExposedField> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            match fields.iter_mut().find(|f| f.name == candidate.name) {
                Some(existing) if candidate.route.len() < existing.route.len() => {
                    *existing = candidate;
                }
                Some(_) => {}
                None => fields.push(candidate),
            }
        }

        Self { fields }
    }

    /// Exposed names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of exposed fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is exposed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if `name` is an exposed field.
    pub fn contains(&self, name: &str) -> bool {
        self.route(name).is_some()
    }

    /// Reads the exposed field `name` from `record`.
    pub fn get(&self, record: &dyn Record, name: &str) -> Option<Value> {
        get_route(record, self.route(name)?)
    }

    /// Writes the exposed field `name` on `record`.
    pub fn set(&self, record: &mut dyn Record, name: &str, value: Value) -> Result<(), ValueError> {
        let route = self.route(name).ok_or_else(|| ValueError::UnknownField {
            record: record.type_name(),
            field: name.to_string(),
        })?;

        if set_route(record, route, value) {
            Ok(())
        } else {
            Err(ValueError::FieldRejected {
                record: record.type_name(),
                field: name.to_string(),
            })
        }
    }

    fn route(&self, name: &str) -> Option<&[usize]> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.route.as_slice())
    }
}

fn collect_fields(
    record: &dyn Record,
    config: &Config,
    prefix: &[usize],
    out: &mut Vec<ExposedField>,
) {
    for (index, def) in record.fields().iter().enumerate() {
        if !def.exported {
            continue;
        }

        let annotation = def
            .annotation(&config.tag_name)
            .map(FieldAnnotation::parse)
            .unwrap_or_default();
        if annotation.omit {
            continue;
        }

        let mut route = prefix.to_vec();
        route.push(index);

        if def.embedded
            && annotation.rename.is_none()
            && let Some(Value::Record(inner)) = record.get_field(index)
        {
            collect_fields(inner.as_record(), config, &route, out);
            continue;
        }

        out.push(ExposedField {
            name: annotation.rename.unwrap_or_else(|| def.name.to_string()),
            route,
        });
    }
}

fn get_route(record: &dyn Record, route: &[usize]) -> Option<Value> {
    let (first, rest) = route.split_first()?;
    let value = record.get_field(*first)?;
    if rest.is_empty() {
        return Some(value);
    }
    match value {
        Value::Record(inner) => get_route(inner.as_record(), rest),
        _ => None,
    }
}

fn set_route(record: &mut dyn Record, route: &[usize], value: Value) -> bool {
    let Some((first, rest)) = route.split_first() else {
        return false;
    };
    if rest.is_empty() {
        return record.set_field(*first, value);
    }
    let Some(Value::Record(mut inner)) = record.get_field(*first) else {
        return false;
    };
    set_route(inner.as_record_mut(), rest, value) && record.set_field(*first, Value::Record(inner))
}

/// Implements [`Record`] for a `Clone` struct whose fields convert to and
/// from [`Value`].
///
/// Every listed field is exported. An optional `=> "tag": "annotation"`
/// attaches a metadata annotation.
///
/// ```
/// use arbor::{Record, impl_record};
///
/// #[derive(Debug, Clone)]
/// struct Device {
///     id: String,
///     secret: String,
/// }
///
/// impl_record!(Device { id, secret => "arbor": "-" });
///
/// let device = Device { id: "d1".into(), secret: "x".into() };
/// assert_eq!(device.fields().len(), 2);
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ident { $($field:ident $(=> $tag:literal : $ann:literal)?),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn fields(&self) -> &'static [$crate::FieldDef] {
                const FIELDS: &[$crate::FieldDef] = &[
                    $( $crate::FieldDef::new(stringify!($field)) $(.annotated(&[($tag, $ann)]))? ),*
                ];
                FIELDS
            }

            fn get_field(&self, index: usize) -> Option<$crate::Value> {
                let name = self.fields().get(index)?.name;
                $(
                    if name == stringify!($field) {
                        return Some($crate::Value::from(self.$field.clone()));
                    }
                )*
                None
            }

            fn set_field(&mut self, index: usize, value: $crate::Value) -> bool {
                let Some(def) = self.fields().get(index) else {
                    return false;
                };
                $(
                    if def.name == stringify!($field) {
                        return match ::core::convert::TryFrom::try_from(&value) {
                            Ok(converted) => {
                                self.$field = converted;
                                true
                            }
                            Err(_) => false,
                        };
                    }
                )*
                false
            }

            fn clone_record(&self) -> Box<dyn $crate::Record> {
                Box::new(self.clone())
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}
