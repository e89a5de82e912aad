//! Utility modules for common functionality
//!
//! This module provides the logger and formatting helpers used throughout the crate.

pub mod logger;
pub(crate) mod format_utils;
