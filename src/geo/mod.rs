//! Spatial types for catalog records
//!
//! Records carry an optional spatial extent (an axis-aligned bounding box in
//! a named CRS). Coordinates are stored longitude-first; callers supply an
//! explicit [`AxisOrder`] at construction instead of relying on any
//! process-wide axis configuration.

use serde::{Deserialize, Serialize};

/// Coordinate axis order of a corner pair supplied by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrder {
    /// x = longitude, y = latitude (the storage convention)
    LonLat,
    /// x = latitude, y = longitude; swapped at the constructor boundary
    LatLon,
}

/// Axis-aligned bounding box, longitude-first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a bounding box from longitude-first coordinates
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a bounding box from two corners in the given axis order.
    ///
    /// `LatLon` corners are swapped into longitude-first storage order.
    pub fn from_corners(min: (f64, f64), max: (f64, f64), axis_order: AxisOrder) -> Self {
        match axis_order {
            AxisOrder::LonLat => Self::new(min.0, min.1, max.0, max.1),
            AxisOrder::LatLon => Self::new(min.1, min.0, max.1, max.0),
        }
    }

    /// Check that all coordinates are finite and min <= max on both axes
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// Check if this box intersects another (closed intervals, so touching
    /// edges count as intersecting)
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// Check if this box fully contains another
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.min_x <= other.min_x
            && self.max_x >= other.max_x
            && self.min_y <= other.min_y
            && self.max_y >= other.max_y
    }
}

/// A record's spatial extent: bounding box plus CRS code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Bounding box, longitude-first
    pub bbox: BoundingBox,
    /// CRS code, e.g. "EPSG:4326"
    pub crs: String,
}

impl Extent {
    /// Create a new extent
    pub fn new(bbox: BoundingBox, crs: impl Into<String>) -> Self {
        Self {
            bbox,
            crs: crs.into(),
        }
    }

    /// Check whether this extent's CRS matches another code
    /// (case-insensitive, no reprojection)
    pub fn crs_matches(&self, other: &str) -> bool {
        self.crs.eq_ignore_ascii_case(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlapping() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_disjoint() {
        let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let b = BoundingBox::new(2.0, 2.0, 3.0, 3.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_intersects_touching_edge() {
        let a = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let b = BoundingBox::new(1.0, 0.0, 2.0, 1.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_contains() {
        let outer = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let inner = BoundingBox::new(2.0, 2.0, 8.0, 8.0);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn test_axis_order_swap() {
        // Sweden-ish box given lat-first must equal the lon-first one
        let lon_first =
            BoundingBox::from_corners((13.754, 60.042), (17.920, 68.410), AxisOrder::LonLat);
        let lat_first =
            BoundingBox::from_corners((60.042, 13.754), (68.410, 17.920), AxisOrder::LatLon);
        assert_eq!(lon_first, lat_first);
        assert_eq!(lon_first.min_x, 13.754);
        assert_eq!(lon_first.max_y, 68.410);
    }

    #[test]
    fn test_validity() {
        assert!(BoundingBox::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!BoundingBox::new(1.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!BoundingBox::new(f64::NAN, 0.0, 1.0, 1.0).is_valid());
    }

    #[test]
    fn test_crs_match_case_insensitive() {
        let extent = Extent::new(BoundingBox::new(0.0, 0.0, 1.0, 1.0), "EPSG:4326");
        assert!(extent.crs_matches("epsg:4326"));
        assert!(!extent.crs_matches("EPSG:3857"));
    }
}
