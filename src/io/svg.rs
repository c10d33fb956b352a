use crate::coil::CoilPath;
use crate::float_types::Real;
use crate::io::IoError;

use svg::Document;
use svg::node::element::{Circle, Polyline};

/// Marker radius and stroke width as fractions of the larger view extent.
const MARKER_RATIO: Real = 0.01;
const STROKE_RATIO: Real = 0.004;
/// Padding around the union bounding rectangle, as a fraction of the
/// larger view extent.
const MARGIN_RATIO: Real = 0.05;

/// Render one or more coil paths as connected marker-point polylines on an
/// equal-aspect viewBox.
///
/// The y axis is flipped so the document matches plot orientation
/// (y grows upward). Fails with [`IoError::MalformedPath`] when there is
/// nothing to draw.
pub fn plot(paths: &[CoilPath]) -> Result<Document, IoError> {
    let mut min_x = Real::MAX;
    let mut min_y = Real::MAX;
    let mut max_x = Real::MIN;
    let mut max_y = Real::MIN;
    let mut any_points = false;

    for path in paths {
        if let Some(rect) = path.bounding_rect() {
            any_points = true;
            min_x = min_x.min(rect.min().x);
            min_y = min_y.min(rect.min().y);
            max_x = max_x.max(rect.max().x);
            max_y = max_y.max(rect.max().y);
        }
    }
    if !any_points {
        return Err(IoError::MalformedPath("no points to plot".to_string()));
    }

    let extent = (max_x - min_x).max(max_y - min_y).max(1.0);
    let margin = MARGIN_RATIO * extent;
    let marker_radius = MARKER_RATIO * extent;
    let stroke_width = STROKE_RATIO * extent;

    let view_width = (max_x - min_x) + 2.0 * margin;
    let view_height = (max_y - min_y) + 2.0 * margin;

    // Flipping y maps the point (x, y) to (x, -y), so the vertical view
    // range becomes [-max_y, -min_y].
    let mut document = Document::new()
        .set("viewBox", (min_x - margin, -max_y - margin, view_width, view_height))
        .set("width", format!("{view_width}mm"))
        .set("height", format!("{view_height}mm"));

    for path in paths {
        let corners = path
            .points()
            .map(|point| format!("{},{}", point.x, -point.y))
            .collect::<Vec<_>>()
            .join(" ");
        document = document.add(
            Polyline::new()
                .set("points", corners)
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", stroke_width),
        );
        for point in path.points() {
            document = document.add(
                Circle::new()
                    .set("cx", point.x)
                    .set("cy", -point.y)
                    .set("r", marker_radius)
                    .set("fill", "black"),
            );
        }
    }

    Ok(document)
}

impl CoilPath {
    /// Single-path convenience for [`plot`].
    pub fn to_svg(&self) -> Result<Document, IoError> {
        plot(core::slice::from_ref(self))
    }
}
