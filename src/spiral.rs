//! Inward polygonal spiral generation
//!
//! **Mathematical Foundation**: a regular polygon's flat-to-flat width is
//! `cos(π/n)` times its corner-to-corner diameter, so every inscribed
//! dimension is divided by `cos(π/n)` before it is used as a radius. The
//! spiral is traced corner by corner with a running radius that shrinks by
//! `(trace_width + spacing) / cos(π/n)` per revolution, either smoothly
//! (a fraction before every corner) or in one step per completed turn.

use crate::coil::{CoilPath, CoilSpecification, ShrinkPolicy};
use crate::errors::InvalidSpecification;
use crate::float_types::{PI, Real, TAU};
use geo::{LineString, coord};

/// Compute the ordered point sequence of an inward polygonal spiral.
///
/// Emits `num_sides` corner points per turn, in ascending angular order
/// starting at 0, plus one terminal point at angle 0, for exactly
/// `num_sides * num_turns + 1` points. The radius never increases from one
/// point to the next.
///
/// Very large turn counts can drive the radius negative; the points are
/// passed through unclamped. This is a known limitation of the layout
/// procedure, not an error.
///
/// ```rust
/// use coilgen::{CoilSpecification, generate};
///
/// let spec = CoilSpecification::default();
/// let coil = generate(&spec)?;
/// assert_eq!(coil.len(), spec.num_sides * spec.num_turns + 1);
/// # Ok::<(), coilgen::errors::InvalidSpecification>(())
/// ```
pub fn generate(spec: &CoilSpecification) -> Result<CoilPath, InvalidSpecification> {
    spec.validate()?;

    let half_angle = PI / spec.num_sides as Real;
    let corner_scale = half_angle.cos();

    // The per-turn policy spends a fractional step inside its first turn,
    // widen the boundary to compensate before the corner conversion.
    let mut outer_diameter = spec.outer_diameter;
    if spec.policy == ShrinkPolicy::PerTurn {
        outer_diameter += spec.trace_width + spec.spacing;
    }

    // inscribed flat-to-flat sizes become circumscribed corner-to-corner
    let outer_boundary = outer_diameter / corner_scale;
    let delta_r = (spec.trace_width + spec.spacing) / corner_scale;
    let corner_step = delta_r / spec.num_sides as Real;

    let mut radius = (outer_boundary - spec.trace_width / corner_scale) / 2.0;

    let angle_per_section = TAU / spec.num_sides as Real;
    let angles: Vec<Real> = (0..spec.num_sides)
        .map(|side| angle_per_section * side as Real)
        .collect();

    let mut coords = Vec::with_capacity(spec.num_sides * spec.num_turns + 1);
    for _turn in 0..spec.num_turns {
        for &angle in &angles {
            if spec.policy == ShrinkPolicy::PerSide {
                radius -= corner_step;
            }
            coords.push(coord! { x: radius * angle.cos(), y: radius * angle.sin() });
        }
        if spec.policy == ShrinkPolicy::PerTurn {
            radius -= delta_r;
        }
    }

    // One fractional step, then the terminal point at angle 0. The
    // per-turn policy takes the fractional step here as well, keeping its
    // terminal segment continuous with the last emitted corner.
    radius -= corner_step;
    coords.push(coord! { x: radius, y: 0.0 });

    Ok(CoilPath::new(LineString::new(coords)))
}
