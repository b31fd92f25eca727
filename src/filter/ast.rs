//! Filter expression AST
//!
//! A closed set of predicate variants evaluated by a single dispatch
//! function; the declarative surface a filter-expression parser would
//! target.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::geo::{AxisOrder, BoundingBox};
use crate::record::AttributePath;

/// A declarative boolean predicate over a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    /// Matches every record
    All,
    /// The literal resolved via the attribute path equals the constant
    PropertyEquals {
        /// Dotted attribute path, may traverse into complex attributes
        path: AttributePath,
        /// Constant to compare against (strict equality)
        literal: Value,
    },
    /// The record's spatial extent intersects the target box
    BBoxIntersects {
        /// Target box, longitude-first
        bbox: BoundingBox,
        /// CRS code the box is expressed in, e.g. "EPSG:4326"
        crs: String,
    },
    /// All sub-filters match
    And(Vec<Filter>),
    /// At least one sub-filter matches
    Or(Vec<Filter>),
    /// The sub-filter does not match
    Not(Box<Filter>),
}

impl Filter {
    /// Create an equality predicate on a dotted attribute path
    pub fn property_equals(path: impl Into<AttributePath>, literal: Value) -> Self {
        Filter::PropertyEquals {
            path: path.into(),
            literal,
        }
    }

    /// Create a bbox intersection predicate from two corners in an explicit
    /// axis order
    pub fn bbox(
        min: (f64, f64),
        max: (f64, f64),
        axis_order: AxisOrder,
        crs: impl Into<String>,
    ) -> Self {
        Filter::BBoxIntersects {
            bbox: BoundingBox::from_corners(min, max, axis_order),
            crs: crs.into(),
        }
    }

    /// Combine filters with AND semantics
    pub fn and(filters: Vec<Filter>) -> Self {
        Filter::And(filters)
    }

    /// Combine filters with OR semantics
    pub fn or(filters: Vec<Filter>) -> Self {
        Filter::Or(filters)
    }

    /// Negate a filter
    pub fn negate(self) -> Self {
        Filter::Not(Box::new(self))
    }

    /// Returns true if this is the match-all filter
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_property_equals_builder() {
        let filter = Filter::property_equals("identifier.value", json!("urn:uuid:abc"));
        match filter {
            Filter::PropertyEquals { path, literal } => {
                assert_eq!(path.to_string(), "identifier.value");
                assert_eq!(literal, json!("urn:uuid:abc"));
            }
            other => panic!("unexpected filter: {:?}", other),
        }
    }

    #[test]
    fn test_bbox_builder_normalizes_axis_order() {
        let lon_first = Filter::bbox(
            (13.754, 60.042),
            (17.920, 68.410),
            AxisOrder::LonLat,
            "EPSG:4326",
        );
        let lat_first = Filter::bbox(
            (60.042, 13.754),
            (68.410, 17.920),
            AxisOrder::LatLon,
            "EPSG:4326",
        );
        assert_eq!(lon_first, lat_first);
    }

    #[test]
    fn test_default_is_all() {
        assert!(Filter::default().is_all());
        assert!(!Filter::property_equals("type", json!("x")).is_all());
    }
}
