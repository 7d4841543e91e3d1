//! Path types for addressing nodes inside a tree.
//!
//! A path is an ordered list of string segments. Each segment is resolved
//! against the node reached so far: a map key, a list index (the decimal
//! form of a non-negative integer), or an exposed record field name.
//!
//! Unlike a dotted string, a [`PathBuf`] never has to escape its separator:
//! segments may contain any character, and the joiner is chosen only when a
//! path is flattened into a key with [`PathBuf::join`].
//!
//! # Usage
//!
//! ```rust
//! use arbor::{PathBuf, path};
//! use std::str::FromStr;
//!
//! // Parse a dotted path
//! let path = PathBuf::from_str("devices.1.name").unwrap();
//!
//! // Build incrementally
//! let built = PathBuf::new().push("devices").push(1).push("name");
//! assert_eq!(path, built);
//!
//! // Or with the macro
//! assert_eq!(path!("devices", 1, "name"), path);
//!
//! // Flatten with any joiner
//! assert_eq!(path.join("/"), "devices/1/name");
//! ```

use std::{cmp::Ordering, fmt, ops::Deref, str::FromStr};

/// Parses a segment as a list index.
///
/// Only plain ASCII digits are accepted; signs, whitespace and empty
/// segments are not indexes.
///
/// ```rust
/// # use arbor::path::parse_index;
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("12"), Some(12));
/// assert_eq!(parse_index("+1"), None);
/// assert_eq!(parse_index("-1"), None);
/// assert_eq!(parse_index("name"), None);
/// assert_eq!(parse_index(""), None);
/// ```
pub fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Returns `true` if the segment addresses a list index.
pub fn is_index(segment: &str) -> bool {
    parse_index(segment).is_some()
}

/// Compares two segments, ordering index segments numerically.
///
/// Numeric segments sort before non-numeric ones; two non-numeric segments
/// compare as strings.
pub fn compare_segments(a: &str, b: &str) -> Ordering {
    match (parse_index(a), parse_index(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Compares two paths segment by segment with [`compare_segments`].
///
/// A path sorts before any longer path it is a prefix of.
pub fn compare_paths<S: AsRef<str>>(a: &[S], b: &[S]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| compare_segments(x.as_ref(), y.as_ref()))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// An owned path made of string segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathBuf {
    segments: Vec<String>,
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from already split segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits a flat key into a path using `joiner`.
    ///
    /// An empty joiner yields a single-segment path. An empty key yields the
    /// empty path.
    ///
    /// ```rust
    /// # use arbor::PathBuf;
    /// let path = PathBuf::split("a::b::0", "::");
    /// assert_eq!(path.as_slice(), ["a", "b", "0"]);
    ///
    /// assert_eq!(PathBuf::split("a.b", "").len(), 1);
    /// assert!(PathBuf::split("", ".").is_empty());
    /// ```
    pub fn split(key: &str, joiner: &str) -> Self {
        if key.is_empty() {
            return Self::new();
        }
        if joiner.is_empty() {
            return Self::from_segments([key]);
        }
        Self::from_segments(key.split(joiner))
    }

    /// Adds a segment to the end of this path.
    ///
    /// Anything displayable can be a segment, so indexes can be pushed as
    /// integers.
    pub fn push(mut self, segment: impl ToString) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Adds a segment in place.
    pub fn push_mut(&mut self, segment: impl ToString) {
        self.segments.push(segment.to_string());
    }

    /// Removes and returns the last segment.
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    /// Returns a copy of this path with `segment` appended.
    pub fn child(&self, segment: impl ToString) -> Self {
        self.clone().push(segment)
    }

    /// Appends every segment of `other`.
    pub fn extend(mut self, other: &[String]) -> Self {
        self.segments.extend_from_slice(other);
        self
    }

    /// Joins the segments into a flat key.
    pub fn join(&self, joiner: &str) -> String {
        self.segments.join(joiner)
    }

    /// Returns the parent path, or `None` if this is the root.
    pub fn parent(&self) -> Option<PathBuf> {
        let (_, parent) = self.segments.split_last()?;
        Some(Self {
            segments: parent.to_vec(),
        })
    }

    /// Returns the last segment, or `None` if empty.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Returns the segments as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.segments
    }

    /// Consumes the path, returning its segments.
    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }
}

impl Deref for PathBuf {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.segments
    }
}

impl AsRef<[String]> for PathBuf {
    fn as_ref(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    /// Splits on `.`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::split(s, "."))
    }
}

impl From<Vec<String>> for PathBuf {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl From<&[&str]> for PathBuf {
    fn from(segments: &[&str]) -> Self {
        Self::from_segments(segments.iter().copied())
    }
}

impl<S: Into<String>> FromIterator<S> for PathBuf {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_segments(iter)
    }
}

impl PartialEq<[&str]> for PathBuf {
    fn eq(&self, other: &[&str]) -> bool {
        self.segments.len() == other.len() && self.segments.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for PathBuf {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// Constructs a [`PathBuf`] from segments.
///
/// - `path!()` - Empty path
/// - `path!("a", 0, "b")` - One segment per argument, anything `ToString`
///
/// Arguments are never split, so `path!("a.b")` is a single segment.
#[macro_export]
macro_rules! path {
    () => {
        $crate::PathBuf::new()
    };

    ($($segment:expr),+ $(,)?) => {{
        let mut path = $crate::PathBuf::new();
        $( path.push_mut($segment); )+
        path
    }};
}
