//! Error types for bounding box parsing and configuration
//!
//! The geometry operations themselves are total and never fail; errors
//! only arise when text or settings are turned into typed values.

use std::fmt;
use std::io;

/// Errors raised while building boxes or settings from external input
#[derive(Debug)]
pub enum GeometryError {
    /// I/O error while reading a settings file
    IoError(io::Error),
    /// An argument outside the accepted domain (inverted bounds, zero grid counts)
    InvalidArgument(String),
    /// Text that could not be parsed into a bounding box
    ParseError(String),
    /// Malformed settings document
    ConfigError(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::IoError(e) => write!(f, "I/O error: {}", e),
            GeometryError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            GeometryError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GeometryError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GeometryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeometryError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeometryError {
    fn from(error: io::Error) -> Self {
        GeometryError::IoError(error)
    }
}

impl From<String> for GeometryError {
    fn from(msg: String) -> Self {
        GeometryError::InvalidArgument(msg)
    }
}

/// Result type for parsing and configuration
pub type GeometryResult<T> = Result<T, GeometryError>;
