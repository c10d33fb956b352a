#![cfg(feature = "dxf-io")]

use std::error::Error;
use std::io::Cursor;

use coilgen::{CoilSpecification, generate};
use dxf::Drawing;
use dxf::entities::EntityType;
use dxf::enums::Units;

#[test]
fn coil_path_to_dxf_round_trip() -> Result<(), Box<dyn Error>> {
    let spec = CoilSpecification::default();
    let coil = generate(&spec)?;
    let first = coil.points().next().unwrap();

    let bytes = coil.to_dxf(Units::Millimeters)?;
    let drawing = Drawing::load(&mut Cursor::new(bytes))?;

    let mut polylines = 0;
    for entity in drawing.entities() {
        if let EntityType::LwPolyline(polyline) = &entity.specific {
            polylines += 1;
            assert_eq!(polyline.vertices.len(), spec.num_sides * spec.num_turns + 1);
            assert!(!polyline.is_closed(), "the spiral polyline must stay open");
            assert!((polyline.vertices[0].x - first.x as f64).abs() < 1e-6);
            assert!((polyline.vertices[0].y - first.y as f64).abs() < 1e-6);
        }
    }
    assert_eq!(polylines, 1);
    Ok(())
}

#[test]
fn dxf_header_carries_millimeter_units() -> Result<(), Box<dyn Error>> {
    let coil = generate(&CoilSpecification::default())?;
    let bytes = coil.to_dxf(Units::Millimeters)?;
    let drawing = Drawing::load(&mut Cursor::new(bytes))?;
    assert!(matches!(drawing.header.default_drawing_units, Units::Millimeters));
    Ok(())
}
