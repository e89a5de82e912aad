//! Coordinate text formatting
//!
//! Utilities for turning coordinates into the text used in WKT output.

/// Format a coordinate for WKT output
///
/// Uses the shortest decimal text that parses back to the same value and
/// always keeps a fractional part for integral values (`10.0`, not `10`).
/// Very large or small magnitudes switch to exponent form (`1e21`).
/// NaN and infinities are written as `NaN`, `inf` and `-inf`.
pub fn format_coordinate(value: f64) -> String {
    format!("{:?}", value)
}
