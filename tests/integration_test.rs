//! Integration tests for the bboxgrid facade

extern crate std;

use std::fs;

use bboxgrid::{BBoxKit, BoundingBox, GeometryError, GridSettings};
use bboxgrid::{create_multi_polygon, gridded_bounding_box, intersect};

#[test]
fn test_grid_and_serialize_workflow() {
    let kit = BBoxKit::with_settings(Some("integration_test.log"), GridSettings::new(2, 2).unwrap()).unwrap();
    let bbox = BoundingBox::from_string("0,0,10,10").unwrap();

    let cells = kit.grid(&bbox);
    std::assert_eq!(cells.len(), 4);
    std::assert_eq!(cells[1], BoundingBox::new(0.0, 5.0, 5.0, 10.0));

    // Neighbouring cells share an edge, which counts as intersecting
    std::assert!(intersect(&cells[0], &cells[1]));
    std::assert!(cells.iter().all(|c| c.intersects(&bbox)));

    let wkt = kit.grid_wkt(&bbox);
    std::assert_eq!(wkt, create_multi_polygon(&gridded_bounding_box(&bbox, 2, 2)));
    std::assert!(wkt.starts_with("MULTIPOLYGON (((0.0 0.0, 0.0 5.0, 5.0 5.0, 5.0 0.0, 0.0 0.0)), "));
    std::assert!(wkt.ends_with("((5.0 5.0, 5.0 10.0, 10.0 10.0, 10.0 5.0, 5.0 5.0)))"));

    std::assert_eq!(
        kit.polygon_wkt(&bbox),
        "POLYGON ((0.0 0.0, 0.0 10.0, 10.0 10.0, 10.0 0.0, 0.0 0.0))"
    );

    let log = fs::read_to_string("integration_test.log").unwrap();
    std::assert!(log.contains("-> 4 cells"));
}

#[test]
fn test_settings_from_config_file() {
    let config_path = std::env::temp_dir().join("bboxgrid_integration_settings.toml");
    fs::write(&config_path, "[grid]\nx = 3\ny = 1\n").unwrap();

    let kit = BBoxKit::from_config_file(
        Some("integration_config_test.log"),
        config_path.to_str().unwrap(),
    ).unwrap();
    std::assert_eq!(kit.settings(), GridSettings { grid_x: 3, grid_y: 1 });

    let cells = kit.grid(&BoundingBox::new(0.0, 0.0, 3.0, 1.0));
    std::assert_eq!(cells.len(), 3);
    std::assert_eq!(cells[2], BoundingBox::new(2.0, 0.0, 3.0, 1.0));

    let _ = fs::remove_file(&config_path);
}

#[test]
fn test_default_kit_uses_bundled_settings() {
    let kit = BBoxKit::new(Some("integration_default_test.log")).unwrap();
    std::assert_eq!(kit.settings(), GridSettings::bundled());
    std::assert_eq!(kit.grid(&BoundingBox::new(0.0, 0.0, 1.0, 1.0)).len(), 16);
}

#[test]
fn test_bounding_box_parsing_errors() {
    std::assert!(matches!(BoundingBox::from_string("1,2,3"), Err(GeometryError::ParseError(_))));
    std::assert!(matches!(BoundingBox::from_string("1,2,x,4"), Err(GeometryError::ParseError(_))));

    let parsed = BoundingBox::from_string(" -1.5 , 2 ,3.25, 4 ").unwrap();
    std::assert_eq!(parsed, BoundingBox::new(-1.5, 2.0, 3.25, 4.0));
}

#[test]
fn test_try_new_rejects_inverted_bounds() {
    std::assert!(matches!(BoundingBox::try_new(5.0, 0.0, 1.0, 1.0), Err(GeometryError::InvalidArgument(_))));
    std::assert!(BoundingBox::try_new(0.0, 0.0, 0.0, 0.0).is_ok());

    let inverted = BoundingBox::new(5.0, 0.0, 1.0, 1.0);
    std::assert!(!inverted.is_normalized());
    std::assert_eq!(inverted.width(), -4.0);
}
