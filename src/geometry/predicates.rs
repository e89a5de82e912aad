//! Containment and intersection tests

use crate::coordinate::BoundingBox;

/// Check if a lat/long lies strictly inside a box given by its corners
///
/// Longitude is tested against the X bounds and latitude against the Y
/// bounds. Both comparisons are exclusive, so a point on an edge is outside.
pub fn is_within_bounding_box(xmin: f64, ymin: f64, xmax: f64, ymax: f64, lat: f64, lon: f64) -> bool {
    lon > xmin && lon < xmax && lat > ymin && lat < ymax
}

/// Check if two boxes overlap or share an edge or corner
pub fn intersect(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.xmin <= b.xmax && a.xmax >= b.xmin && a.ymin <= b.ymax && a.ymax >= b.ymin
}
