//! Well-Known Text serialization of bounding boxes
//!
//! Every box becomes a single closed ring of five vertices, starting at the
//! lower-left corner and going up the west edge first:
//! `(xmin ymin, xmin ymax, xmax ymax, xmax ymin, xmin ymin)`.

use log::debug;
use crate::coordinate::BoundingBox;
use crate::utils::format_utils::format_coordinate;

/// Separator between vertices and between polygons
const SEPARATOR: &str = ", ";

/// Render a box as a WKT `POLYGON`
///
/// # Example
/// ```
/// use bboxgrid::{BoundingBox, create_polygon};
///
/// let wkt = create_polygon(&BoundingBox::new(0.0, 0.0, 10.0, 10.0));
/// assert_eq!(wkt, "POLYGON ((0.0 0.0, 0.0 10.0, 10.0 10.0, 10.0 0.0, 0.0 0.0))");
/// ```
pub fn create_polygon(bbox: &BoundingBox) -> String {
    format!("POLYGON {}", polygon_body(bbox))
}

/// Render a list of boxes as a WKT `MULTIPOLYGON`
///
/// An empty list yields `MULTIPOLYGON EMPTY`.
pub fn create_multi_polygon(boxes: &[BoundingBox]) -> String {
    if boxes.is_empty() {
        debug!("No boxes given, writing empty multipolygon");
        return "MULTIPOLYGON EMPTY".to_string();
    }

    let polygons: Vec<String> = boxes.iter().map(polygon_body).collect();
    debug!("Writing multipolygon with {} polygons", polygons.len());
    format!("MULTIPOLYGON ({})", polygons.join(SEPARATOR))
}

/// The parenthesized ring of a box, e.g. `((0.0 0.0, ..., 0.0 0.0))`
pub(crate) fn polygon_body(bbox: &BoundingBox) -> String {
    let vertices = [
        (bbox.xmin, bbox.ymin),
        (bbox.xmin, bbox.ymax),
        (bbox.xmax, bbox.ymax),
        (bbox.xmax, bbox.ymin),
        (bbox.xmin, bbox.ymin),
    ];

    let ring: Vec<String> = vertices
        .iter()
        .map(|&(x, y)| format!("{} {}", format_coordinate(x), format_coordinate(y)))
        .collect();

    format!("(({}))", ring.join(SEPARATOR))
}
