//! Bounding box structure for axis-aligned regions

use crate::errors::{GeometryError, GeometryResult};
use crate::geometry::predicates;

/// An axis-aligned bounding box in a planar or lat/long coordinate system
///
/// `(xmin, ymin)` is the lower-left corner and `(xmax, ymax)` the
/// upper-right one. Callers are expected to keep `xmin <= xmax` and
/// `ymin <= ymax`; [`BoundingBox::new`] does not check this. Use
/// [`BoundingBox::try_new`] to reject inverted bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum X coordinate (west edge, longitude)
    pub xmin: f64,
    /// Minimum Y coordinate (south edge, latitude)
    pub ymin: f64,
    /// Maximum X coordinate (east edge, longitude)
    pub xmax: f64,
    /// Maximum Y coordinate (north edge, latitude)
    pub ymax: f64,
}

impl BoundingBox {
    /// Create a new bounding box without validating the corners
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        BoundingBox { xmin, ymin, xmax, ymax }
    }

    /// Create a new bounding box, rejecting inverted bounds
    ///
    /// NaN coordinates are accepted, they are not ordered against anything.
    pub fn try_new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> GeometryResult<Self> {
        let bbox = BoundingBox::new(xmin, ymin, xmax, ymax);
        if xmin > xmax || ymin > ymax {
            return Err(GeometryError::InvalidArgument(format!(
                "Inverted bounding box: xmin={}, ymin={}, xmax={}, ymax={}",
                xmin, ymin, xmax, ymax
            )));
        }
        Ok(bbox)
    }

    /// Parse a bounding box from a string (format: "xmin,ymin,xmax,ymax")
    pub fn from_string(bbox_str: &str) -> GeometryResult<Self> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err(GeometryError::ParseError(
                "Bounding box must have 4 comma-separated values".to_string()));
        }

        let parse = |value: &str, name: &str| -> GeometryResult<f64> {
            value.trim().parse::<f64>()
                .map_err(|_| GeometryError::ParseError(format!("Invalid {} value: '{}'", name, value.trim())))
        };

        let xmin = parse(parts[0], "xmin")?;
        let ymin = parse(parts[1], "ymin")?;
        let xmax = parse(parts[2], "xmax")?;
        let ymax = parse(parts[3], "ymax")?;

        Ok(BoundingBox::new(xmin, ymin, xmax, ymax))
    }

    /// Whether the corners respect `xmin <= xmax` and `ymin <= ymax`
    pub fn is_normalized(&self) -> bool {
        self.xmin <= self.xmax && self.ymin <= self.ymax
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Get the area of the bounding box
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Check if a lat/long lies strictly inside this box
    ///
    /// Points on an edge are not contained.
    pub fn contains_strict(&self, lat: f64, lon: f64) -> bool {
        predicates::is_within_bounding_box(self.xmin, self.ymin, self.xmax, self.ymax, lat, lon)
    }

    /// Check if this box overlaps or touches another one
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        predicates::intersect(self, other)
    }
}
