//! Uniform grid subdivision of a bounding box

use log::{debug, warn};
use crate::coordinate::BoundingBox;

/// Divide a bounding box into `grid_x * grid_y` equal cells
///
/// Cells are produced X-major: every Y cell of column 0 comes before any
/// cell of column 1. Each cell's minimum corner is computed from the
/// parent's minimum plus a whole number of steps, and its maximum corner as
/// minimum plus one step, so neighbouring edges may differ by rounding.
///
/// # Arguments
/// * `bbox` - The box to subdivide
/// * `grid_x` - Number of cells along the X axis
/// * `grid_y` - Number of cells along the Y axis
///
/// # Returns
/// The cells in X-major order, or an empty vector if either count is zero
pub fn gridded_bounding_box(bbox: &BoundingBox, grid_x: u32, grid_y: u32) -> Vec<BoundingBox> {
    if grid_x == 0 || grid_y == 0 {
        warn!("Degenerate grid {}x{} requested, returning no cells", grid_x, grid_y);
        return Vec::new();
    }

    let cell_width = bbox.width() / f64::from(grid_x);
    let cell_height = bbox.height() / f64::from(grid_y);
    debug!("Gridding {:?} into {}x{} cells of {}x{}",
           bbox, grid_x, grid_y, cell_width, cell_height);

    let mut cells = Vec::with_capacity(grid_x as usize * grid_y as usize);
    for i in 0..grid_x {
        let xmin = bbox.xmin + f64::from(i) * cell_width;
        for j in 0..grid_y {
            let ymin = bbox.ymin + f64::from(j) * cell_height;
            cells.push(BoundingBox::new(xmin, ymin, xmin + cell_width, ymin + cell_height));
        }
    }

    debug!("Produced {} grid cells", cells.len());
    cells
}

/// Divide a bounding box into a square `grid * grid` layout
pub fn gridded_bounding_box_square(bbox: &BoundingBox, grid: u32) -> Vec<BoundingBox> {
    gridded_bounding_box(bbox, grid, grid)
}
