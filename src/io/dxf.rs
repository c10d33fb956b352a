use crate::coil::CoilPath;
use std::error::Error;

use dxf::Drawing;
use dxf::LwPolylineVertex;
use dxf::entities::*;
use dxf::enums::{AcadVersion, Units};

#[doc = " Export a coil path to DXF as a single open lightweight polyline."]
#[doc = ""]
#[doc = " The drawing's `$INSUNITS` header is stamped with `units` so downstream"]
#[doc = " CAD tools interpret the coordinates correctly. The polyline is left"]
#[doc = " open; closing or validating the geometry is up to the consumer."]
#[doc = ""]
#[doc = " # Returns"]
#[doc = " A `Result` containing the DXF file as a byte vector or an error if exporting fails."]
#[allow(clippy::unnecessary_cast)]
pub fn to_dxf(path: &CoilPath, units: Units) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R2013;
    drawing.header.default_drawing_units = units;

    let mut polyline = LwPolyline::default();
    for point in path.points() {
        polyline.vertices.push(LwPolylineVertex {
            x: point.x as f64,
            y: point.y as f64,
            ..Default::default()
        });
    }
    drawing.add_entity(Entity::new(EntityType::LwPolyline(polyline)));

    let mut buffer = Vec::new();
    drawing.save(&mut buffer)?;
    Ok(buffer)
}

impl CoilPath {
    pub fn to_dxf(&self, units: Units) -> Result<Vec<u8>, Box<dyn Error>> {
        self::to_dxf(self, units)
    }
}
