use log::info;
use crate::config::GridSettings;
use crate::coordinate::BoundingBox;
use crate::errors::GeometryResult;
use crate::geometry::{grid, wkt};
use crate::utils::logger::Logger;

/// Main interface to the bboxgrid library
///
/// Bundles grid settings with a file logger so callers can grid and
/// serialize boxes without passing counts around.
pub struct BBoxKit {
    logger: Logger,
    settings: GridSettings,
}

impl BBoxKit {
    /// Create a new BBoxKit instance with the bundled settings
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "bboxgrid.log"
    ///
    /// # Returns
    /// A BBoxKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> GeometryResult<Self> {
        Self::with_settings(log_file, GridSettings::bundled())
    }

    /// Create a new BBoxKit instance with explicit settings
    pub fn with_settings(log_file: Option<&str>, settings: GridSettings) -> GeometryResult<Self> {
        let log_path = log_file.unwrap_or("bboxgrid.log");
        let logger = Logger::new(log_path)?;
        Ok(BBoxKit { logger, settings })
    }

    /// Create a new BBoxKit instance with settings read from a TOML file
    pub fn from_config_file(log_file: Option<&str>, config_path: &str) -> GeometryResult<Self> {
        let settings = GridSettings::from_file(config_path)?;
        Self::with_settings(log_file, settings)
    }

    /// The active grid settings
    pub fn settings(&self) -> GridSettings {
        self.settings
    }

    /// Subdivide a box using the configured grid counts
    pub fn grid(&self, bbox: &BoundingBox) -> Vec<BoundingBox> {
        let cells = grid::gridded_bounding_box(bbox, self.settings.grid_x, self.settings.grid_y);
        info!("Gridded box into {} cells", cells.len());
        let _ = self.logger.log_line(&format!(
            "grid {}x{} over ({}, {}, {}, {}) -> {} cells",
            self.settings.grid_x, self.settings.grid_y,
            bbox.xmin, bbox.ymin, bbox.xmax, bbox.ymax, cells.len()));
        cells
    }

    /// Subdivide a box and render the cells as a single `MULTIPOLYGON`
    pub fn grid_wkt(&self, bbox: &BoundingBox) -> String {
        wkt::create_multi_polygon(&self.grid(bbox))
    }

    /// Render a box as a `POLYGON`
    pub fn polygon_wkt(&self, bbox: &BoundingBox) -> String {
        let polygon = wkt::create_polygon(bbox);
        let _ = self.logger.log_line(&format!("polygon {}", polygon));
        polygon
    }
}
