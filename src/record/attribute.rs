//! Attribute values and attribute paths
//!
//! Values mirror the schema shapes: a simple literal carries a scalar, a
//! complex value carries named sub-attributes. Paths are dotted attribute
//! names (`identifier.value`); resolving a path that leaves the structure at
//! any segment yields `None` rather than an error.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A typed attribute value on a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Nested attribute holding named sub-attributes
    Complex(BTreeMap<String, AttributeValue>),
    /// Scalar literal
    Simple(Value),
}

impl AttributeValue {
    /// Create a simple string literal
    pub fn literal(value: impl Into<String>) -> Self {
        AttributeValue::Simple(Value::String(value.into()))
    }

    /// Create a complex value from (name, value) pairs
    pub fn complex<I>(properties: I) -> Self
    where
        I: IntoIterator<Item = (String, AttributeValue)>,
    {
        AttributeValue::Complex(properties.into_iter().collect())
    }

    /// Returns the scalar for simple values, None for complex ones
    pub fn as_simple(&self) -> Option<&Value> {
        match self {
            AttributeValue::Simple(value) => Some(value),
            AttributeValue::Complex(_) => None,
        }
    }

    /// Returns the named sub-attribute for complex values
    pub fn property(&self, name: &str) -> Option<&AttributeValue> {
        match self {
            AttributeValue::Simple(_) => None,
            AttributeValue::Complex(properties) => properties.get(name),
        }
    }

    /// Returns true if this is a complex value
    pub fn is_complex(&self) -> bool {
        matches!(self, AttributeValue::Complex(_))
    }

    /// Walks the remaining path segments down the tagged structure.
    ///
    /// An empty segment list resolves to this value's own scalar (None for
    /// complex values); a segment that does not name a sub-attribute ends
    /// resolution with None.
    pub fn resolve<'a>(&'a self, segments: &[String]) -> Option<&'a Value> {
        match segments.split_first() {
            None => self.as_simple(),
            Some((head, rest)) => self.property(head)?.resolve(rest),
        }
    }
}

/// A dotted attribute path, e.g. `identifier.value`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributePath {
    segments: Vec<String>,
}

impl AttributePath {
    /// Parse a dotted path. Empty segments are dropped, so `"a..b"` and
    /// `"a.b"` are the same path; an entirely empty input yields no segments.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Returns the first segment (the top-level attribute name)
    pub fn head(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Returns the segments after the first
    pub fn tail(&self) -> &[String] {
        if self.segments.is_empty() {
            &[]
        } else {
            &self.segments[1..]
        }
    }

    /// Returns true if the path has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl From<&str> for AttributePath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_simple_resolution() {
        let value = AttributeValue::literal("hello");
        assert_eq!(value.resolve(&[]), Some(&json!("hello")));
        assert_eq!(value.resolve(&["value".into()]), None);
    }

    #[test]
    fn test_complex_resolution() {
        let value = AttributeValue::complex([(
            "value".to_string(),
            AttributeValue::literal("urn:uuid:abc"),
        )]);

        assert_eq!(value.resolve(&["value".into()]), Some(&json!("urn:uuid:abc")));
        // A complex value has no scalar of its own
        assert_eq!(value.resolve(&[]), None);
        // Absent segment ends resolution
        assert_eq!(value.resolve(&["missing".into()]), None);
    }

    #[test]
    fn test_nested_complex_resolution() {
        let inner = AttributeValue::complex([("value".to_string(), AttributeValue::literal("x"))]);
        let outer = AttributeValue::complex([("inner".to_string(), inner)]);

        assert_eq!(
            outer.resolve(&["inner".into(), "value".into()]),
            Some(&json!("x"))
        );
        assert_eq!(outer.resolve(&["inner".into(), "other".into()]), None);
    }

    #[test]
    fn test_path_parsing() {
        let path = AttributePath::parse("identifier.value");
        assert_eq!(path.len(), 2);
        assert_eq!(path.head(), Some("identifier"));
        assert_eq!(path.tail(), &["value".to_string()]);
        assert_eq!(path.to_string(), "identifier.value");
    }

    #[test]
    fn test_path_empty_segments_dropped() {
        assert_eq!(AttributePath::parse("a..b"), AttributePath::parse("a.b"));
        assert!(AttributePath::parse("").is_empty());
    }

    #[test]
    fn test_untagged_deserialization() {
        let value: AttributeValue =
            serde_json::from_value(json!({"value": "urn:uuid:abc"})).unwrap();
        assert!(value.is_complex());

        let value: AttributeValue = serde_json::from_value(json!("plain")).unwrap();
        assert_eq!(value.as_simple(), Some(&json!("plain")));
    }
}
