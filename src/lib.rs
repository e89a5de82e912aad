pub mod errors;
pub mod coordinate;
pub mod geometry;
pub mod config;
pub mod utils;
pub mod api;

pub use crate::api::BBoxKit;

pub use errors::{GeometryError, GeometryResult};
pub use coordinate::BoundingBox;
pub use config::GridSettings;
pub use geometry::{
    create_multi_polygon, create_polygon, gridded_bounding_box, gridded_bounding_box_square,
    intersect, is_within_bounding_box,
};
