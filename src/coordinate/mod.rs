//! Coordinate handling for bounding boxes
//!
//! This module provides the axis-aligned bounding box value type that
//! every geometry operation works on.

mod bbox;

// Re-export key types
pub use self::bbox::BoundingBox;
