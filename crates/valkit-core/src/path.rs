// SPDX-License-Identifier: MIT OR Apache-2.0
//! Dotted path parsing
//!
//! A path such as `user.address.city` names a value nested inside JSON
//! objects (and arrays, with numeric segments like `items.0.name`). Parsing
//! splits on `.` and performs no escaping, so a segment can never itself
//! contain a dot when it comes from text. Use [`ValuePath::from_segments`]
//! for keys that do.
//!
//! Serialized, a path is its list of segments, so the root path and
//! segments containing dots survive a round trip.

use crate::error::{Result, ValkitError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Separator between path segments
pub const PATH_SEPARATOR: char = '.';

/// A parsed path: an ordered list of key segments
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ValuePath {
    segments: SmallVec<[String; 4]>,
}

impl ValuePath {
    /// Parse a dotted path.
    ///
    /// Empty segments are kept (`a..b` has three segments, the middle one
    /// empty) since the empty string is a valid object key.
    ///
    /// # Errors
    ///
    /// Returns [`ValkitError::EmptyPath`] for the empty string.
    pub fn parse(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Err(ValkitError::EmptyPath);
        }
        Ok(Self {
            segments: path.split(PATH_SEPARATOR).map(str::to_owned).collect(),
        })
    }

    /// Build a path from pre-split segments.
    ///
    /// An empty iterator yields the root path, which resolves to the value
    /// it is applied to.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The segments in traversal order
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the root path
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a segment
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }
}

impl fmt::Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{PATH_SEPARATOR}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for ValuePath {
    type Err = ValkitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for ValuePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.segments)
    }
}

impl<'de> Deserialize<'de> for ValuePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let segments = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_segments(segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let path = ValuePath::parse("a.b.c").unwrap();
        assert_eq!(path.segments(), ["a", "b", "c"]);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_parse_single_segment() {
        let path = ValuePath::parse("name").unwrap();
        assert_eq!(path.segments(), ["name"]);
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert!(matches!(ValuePath::parse(""), Err(ValkitError::EmptyPath)));
    }

    #[test]
    fn test_parse_keeps_empty_segments() {
        let path = ValuePath::parse("a..b").unwrap();
        assert_eq!(path.segments(), ["a", "", "b"]);

        let path = ValuePath::parse(".").unwrap();
        assert_eq!(path.segments(), ["", ""]);
    }

    #[test]
    fn test_from_segments_root() {
        let path = ValuePath::from_segments(Vec::<String>::new());
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_display_joins_segments() {
        let mut path = ValuePath::from_segments(["users", "0"]);
        path.push("name");
        assert_eq!(path.to_string(), "users.0.name");
    }

    #[test]
    fn test_from_str() {
        let path: ValuePath = "x.y".parse().unwrap();
        assert_eq!(path, ValuePath::from_segments(["x", "y"]));
    }

    #[test]
    fn test_serde_as_segments() {
        let path = ValuePath::parse("a.b").unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"["a","b"]"#);

        let back: ValuePath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);

        assert!(serde_json::from_str::<ValuePath>("\"a.b\"").is_err());
    }

    #[test]
    fn test_serde_root_path_round_trips() {
        let root = ValuePath::default();
        let json = serde_json::to_string(&root).unwrap();
        assert_eq!(json, "[]");
        let back: ValuePath = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_serde_keeps_dotted_segment() {
        let path = ValuePath::from_segments(["a.b", "c"]);
        let json = serde_json::to_string(&path).unwrap();
        let back: ValuePath = serde_json::from_str(&json).unwrap();
        assert_eq!(back.segments(), ["a.b", "c"]);
        assert_eq!(back, path);
    }
}
