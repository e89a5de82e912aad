//! Geometry operations over bounding boxes
//!
//! Stateless functions for grid subdivision, WKT serialization and
//! containment/intersection tests.

pub mod grid;
pub mod wkt;
pub mod predicates;

pub use grid::{gridded_bounding_box, gridded_bounding_box_square};
pub use wkt::{create_multi_polygon, create_polygon};
pub use predicates::{intersect, is_within_bounding_box};
