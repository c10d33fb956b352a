//! DC resistance estimation from trace geometry

use crate::coil::CoilPath;
use crate::errors::InvalidSpecification;
use crate::float_types::{METER, Real};

/// Estimate the DC resistance of a coil trace in ohms.
///
/// Sums the Euclidean length of the open path, converts the length and the
/// trace cross-section from millimeters to meters, and applies
/// `resistance = resistivity * length / area`. Conductor resistivities are
/// tabulated in [`float_types`](crate::float_types).
///
/// Skin effect and mutual coupling are not modeled; this is the DC
/// estimate only.
pub fn estimate_resistance(
    path: &CoilPath,
    trace_width: Real,
    trace_thickness: Real,
    resistivity: Real,
) -> Result<Real, InvalidSpecification> {
    if path.len() < 2 {
        return Err(InvalidSpecification::PathTooShort(path.len()));
    }
    for (name, value) in [("trace_width", trace_width), ("trace_thickness", trace_thickness)] {
        if value <= 0.0 {
            return Err(InvalidSpecification::NonPositiveDimension { name, value });
        }
    }

    let total_length = path.total_length() / METER;
    let area = (trace_width / METER) * (trace_thickness / METER);
    Ok(resistivity * total_length / area)
}
