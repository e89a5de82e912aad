//! Tests for the file-backed global logger

extern crate std;

use std::fs;

use bboxgrid::utils::logger::Logger;
use bboxgrid::{gridded_bounding_box, BoundingBox};

#[test]
fn test_global_logger_records_grid_operations() {
    Logger::init_global_logger("logger_test.log").unwrap();
    // A second install keeps the first logger
    Logger::init_global_logger("logger_test_second.log").unwrap();

    gridded_bounding_box(&BoundingBox::new(0.0, 0.0, 1.0, 1.0), 0, 3);
    gridded_bounding_box(&BoundingBox::new(0.0, 0.0, 1.0, 1.0), 2, 3);

    let contents = fs::read_to_string("logger_test.log").unwrap();
    std::assert!(contents.contains("[WARN] Degenerate grid 0x3 requested"));
    std::assert!(contents.contains("[DEBUG] Produced 6 grid cells"));

    let second = fs::read_to_string("logger_test_second.log").unwrap();
    std::assert!(second.is_empty());
}
