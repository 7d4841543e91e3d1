//! Conversion between text and scalar values.
//!
//! Flattened, string-only storage loses the type of each leaf. The typed
//! flattening operations tag every key with a [`ScalarKind`] and use this
//! module to format values on the way out and parse them on the way back.
//!
//! | Tag     | Value variant      | Accepted text                              |
//! |---------|--------------------|--------------------------------------------|
//! | `str`   | [`Value::Text`]    | anything                                   |
//! | `bool`  | [`Value::Bool`]    | `true yes on 1 t` / `false no off 0 f`     |
//! | `int`   | [`Value::Int`]     | decimal `i64`                              |
//! | `float` | [`Value::Float`]   | anything `f64` parses                      |
//! | `time`  | [`Value::Time`]    | `now` or one of [`TIME_LAYOUTS`]           |

use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat};

use crate::{Clock, Value};

pub mod errors;

pub use errors::ScalarError;

/// Zoned layouts tried, in order, after RFC 3339 and before RFC 2822.
const ZONED_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f %z"];

/// Layouts without an offset, interpreted as UTC.
const NAIVE_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Date-only layout, interpreted as midnight UTC.
const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Human-readable list of every accepted time layout, in the order tried.
pub const TIME_LAYOUTS: &[&str] = &[
    "RFC 3339",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "RFC 2822",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d",
];

/// The scalar kinds that survive a trip through string-only storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarKind {
    Str,
    Bool,
    Float,
    Int,
    Time,
}

impl ScalarKind {
    /// Every kind, in tag order.
    pub const ALL: [ScalarKind; 5] = [
        ScalarKind::Str,
        ScalarKind::Bool,
        ScalarKind::Float,
        ScalarKind::Int,
        ScalarKind::Time,
    ];

    /// The tag embedded in flat keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarKind::Str => "str",
            ScalarKind::Bool => "bool",
            ScalarKind::Float => "float",
            ScalarKind::Int => "int",
            ScalarKind::Time => "time",
        }
    }

    /// Maps a tag to its kind, treating unknown tags as [`ScalarKind::Str`].
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(ScalarKind::Str)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarKind {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScalarKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ScalarError::UnknownTag { tag: s.to_string() })
    }
}

/// Infers the kind of a leaf from its variant.
///
/// Anything that is not a bool, number or timestamp is reported as
/// [`ScalarKind::Str`].
pub fn detect(value: &Value) -> ScalarKind {
    match value {
        Value::Bool(_) => ScalarKind::Bool,
        Value::Int(_) => ScalarKind::Int,
        Value::Float(_) => ScalarKind::Float,
        Value::Time(_) => ScalarKind::Time,
        _ => ScalarKind::Str,
    }
}

/// Parses a boolean from its common spellings, ignoring case.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" | "t" => Some(true),
        "false" | "no" | "off" | "0" | "f" => Some(false),
        _ => None,
    }
}

/// Parses a timestamp from `now` or any of the [`TIME_LAYOUTS`].
pub fn parse_time(text: &str, clock: &dyn Clock) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("now") {
        return Some(clock.now().fixed_offset());
    }
    parse_time_layouts(text)
}

fn parse_time_layouts(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(text) {
        return Some(t);
    }
    if let Some(t) = ZONED_LAYOUTS
        .iter()
        .find_map(|layout| DateTime::parse_from_str(text, layout).ok())
    {
        return Some(t);
    }
    if let Ok(t) = DateTime::parse_from_rfc2822(text) {
        return Some(t);
    }
    if let Some(t) = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
    {
        return Some(t.and_utc().fixed_offset());
    }
    NaiveDate::parse_from_str(text, DATE_LAYOUT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|t| t.and_utc().fixed_offset())
}

/// Parses `text` as a value of `kind`.
///
/// ```
/// use arbor::{SystemClock, Value};
/// use arbor::scalar::{ScalarKind, parse};
///
/// assert_eq!(parse("On", ScalarKind::Bool, &SystemClock).unwrap(), Value::Bool(true));
/// assert_eq!(parse("42", ScalarKind::Int, &SystemClock).unwrap(), Value::Int(42));
/// assert!(parse("forty", ScalarKind::Int, &SystemClock).is_err());
/// ```
pub fn parse(text: &str, kind: ScalarKind, clock: &dyn Clock) -> Result<Value, ScalarError> {
    let fail = |reason: String| ScalarError::Parse {
        kind,
        input: text.to_string(),
        reason,
    };

    match kind {
        ScalarKind::Str => Ok(Value::Text(text.to_string())),
        ScalarKind::Bool => parse_bool(text)
            .map(Value::Bool)
            .ok_or_else(|| fail("not a recognised boolean".to_string())),
        ScalarKind::Int => text
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| fail(e.to_string())),
        ScalarKind::Float => text
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| fail(e.to_string())),
        ScalarKind::Time => parse_time(text, clock)
            .map(Value::Time)
            .ok_or_else(|| fail("matches no known time layout".to_string())),
    }
}

/// Formats a leaf as text.
///
/// Null formats as the empty string. Containers, and bytes that are not
/// UTF-8, have no text form.
pub fn format(value: &Value) -> Result<String, ScalarError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Int(n) => Ok(n.to_string()),
        Value::Float(f) => Ok(f.to_string()),
        Value::Text(s) => Ok(s.clone()),
        Value::Time(t) => Ok(t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        Value::Bytes(b) => String::from_utf8(b.clone()).map_err(|e| ScalarError::Format {
            type_name: value.type_name(),
            reason: e.to_string(),
        }),
        Value::Map(_) | Value::List(_) | Value::Record(_) => Err(ScalarError::Format {
            type_name: value.type_name(),
            reason: "containers have no scalar form".to_string(),
        }),
    }
}

/// Converts an arbitrary value into `kind`.
///
/// Values already of the target kind pass through and integers widen to
/// floats. Anything else is formatted and then parsed.
pub fn coerce(value: Value, kind: ScalarKind, clock: &dyn Clock) -> Result<Value, ScalarError> {
    match (kind, value) {
        (ScalarKind::Str, value @ Value::Text(_))
        | (ScalarKind::Bool, value @ Value::Bool(_))
        | (ScalarKind::Int, value @ Value::Int(_))
        | (ScalarKind::Float, value @ Value::Float(_))
        | (ScalarKind::Time, value @ Value::Time(_)) => Ok(value),
        (ScalarKind::Float, Value::Int(n)) => Ok(Value::Float(n as f64)),
        (kind, Value::Text(text)) => parse(&text, kind, clock),
        (kind, other) => parse(&format(&other)?, kind, clock),
    }
}

/// Guesses a typed value for `text`.
///
/// Tries, in order: integer, float, `true`/`false`, then the time layouts
/// (but not `now`). Returns `None` when the text should stay text.
pub fn autodetect(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(Value::Int(n));
    }
    if trimmed.bytes().any(|b| b.is_ascii_digit())
        && let Ok(f) = trimmed.parse::<f64>()
    {
        return Some(Value::Float(f));
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return Some(Value::Bool(true));
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Some(Value::Bool(false));
    }
    parse_time_layouts(trimmed).map(Value::Time)
}
