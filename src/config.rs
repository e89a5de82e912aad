//! Grid settings and their TOML representation
//!
//! Settings are read from a `[grid]` table holding either per-axis counts
//! (`x` and `y`) or a single `size` used for both axes. Per-axis keys win
//! over `size` when both are present.

use std::fs;
use lazy_static::lazy_static;
use log::debug;
use crate::errors::{GeometryError, GeometryResult};

lazy_static! {
    // Parse the bundled defaults once
    static ref DEFAULT_SETTINGS: GridSettings = {
        let content = include_str!("../bboxgrid.toml");
        GridSettings::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse bundled grid settings: {}", e);
            GridSettings::default()
        })
    };
}

/// Number of grid cells along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSettings {
    /// Cells along the X axis
    pub grid_x: u32,
    /// Cells along the Y axis
    pub grid_y: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        GridSettings { grid_x: 4, grid_y: 4 }
    }
}

impl GridSettings {
    /// Create settings from explicit counts, rejecting zero
    pub fn new(grid_x: u32, grid_y: u32) -> GeometryResult<Self> {
        if grid_x == 0 || grid_y == 0 {
            return Err(GeometryError::InvalidArgument(format!(
                "Grid counts must be positive, got {}x{}", grid_x, grid_y)));
        }
        Ok(GridSettings { grid_x, grid_y })
    }

    /// The settings bundled with the crate
    pub fn bundled() -> GridSettings {
        *DEFAULT_SETTINGS
    }

    /// Parse settings from a TOML string
    ///
    /// Missing keys fall back to [`GridSettings::default`].
    pub fn from_str(content: &str) -> GeometryResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(GeometryError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let defaults = GridSettings::default();
        let Some(grid) = toml_value.get("grid") else {
            debug!("No [grid] table, using default settings");
            return Ok(defaults);
        };
        let table = grid.as_table()
            .ok_or_else(|| GeometryError::ConfigError("'grid' must be a table".to_string()))?;

        let size = Self::read_count(table, "size")?;
        let grid_x = Self::read_count(table, "x")?.or(size).unwrap_or(defaults.grid_x);
        let grid_y = Self::read_count(table, "y")?.or(size).unwrap_or(defaults.grid_y);
        debug!("Loaded grid settings: {}x{}", grid_x, grid_y);

        Self::new(grid_x, grid_y)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &str) -> GeometryResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Helper to read an optional grid count from a table
    fn read_count(table: &toml::value::Table, key: &str) -> GeometryResult<Option<u32>> {
        let Some(value) = table.get(key) else {
            return Ok(None);
        };

        let raw = value.as_integer()
            .ok_or_else(|| GeometryError::ConfigError(format!("grid.{} must be an integer", key)))?;

        u32::try_from(raw)
            .map(Some)
            .map_err(|_| GeometryError::InvalidArgument(format!("grid.{} out of range: {}", key, raw)))
    }
}
