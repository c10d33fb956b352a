//! Coil specification and path types

use crate::errors::InvalidSpecification;
use crate::float_types::Real;
use geo::{BoundingRect, Coord, EuclideanLength, LineString, Rect};

/// How the running radius steps inward while the spiral is traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShrinkPolicy {
    /// Shrink by a fraction of the per-turn step before every corner,
    /// tapering smoothly within each turn.
    PerSide,
    /// Hold the radius for a whole turn, then step inward by the full
    /// per-turn amount.
    #[default]
    PerTurn,
}

/// Immutable parameter set describing one coil.
///
/// All linear dimensions share a single unit (millimeters in the reference
/// use case) and must be positive. Flat-to-flat ("inscribed") dimensions
/// are converted to corner-to-corner radii by the generator.
///
/// The `Default` specification is a 6-sided, 7-turn NFC reference coil.
#[derive(Debug, Clone, PartialEq)]
pub struct CoilSpecification {
    /// Outer flat-to-flat (inscribed) diameter of the coil
    pub outer_diameter: Real,
    /// Width of the copper trace
    pub trace_width: Real,
    /// Thickness of the copper trace
    pub trace_thickness: Real,
    /// Spacing between adjacent turns
    pub spacing: Real,
    /// Number of turns in the coil
    pub num_turns: usize,
    /// Number of polygon sides (6 = hexagon, 100 ≈ circle)
    pub num_sides: usize,
    /// Turn layout style
    pub policy: ShrinkPolicy,
}

impl Default for CoilSpecification {
    fn default() -> Self {
        CoilSpecification {
            outer_diameter: 31.5,
            trace_width: 0.3,
            trace_thickness: 0.035,
            spacing: 0.3,
            num_turns: 7,
            num_sides: 6,
            policy: ShrinkPolicy::PerTurn,
        }
    }
}

impl CoilSpecification {
    /// Check the parameter constraints the generator relies on.
    pub fn validate(&self) -> Result<(), InvalidSpecification> {
        if self.num_sides < 3 {
            return Err(InvalidSpecification::TooFewSides(self.num_sides));
        }
        if self.num_turns < 1 {
            return Err(InvalidSpecification::TooFewTurns(self.num_turns));
        }
        for (name, value) in [
            ("outer_diameter", self.outer_diameter),
            ("trace_width", self.trace_width),
            ("trace_thickness", self.trace_thickness),
            ("spacing", self.spacing),
        ] {
            if value <= 0.0 {
                return Err(InvalidSpecification::NonPositiveDimension { name, value });
            }
        }
        Ok(())
    }
}

/// Ordered point sequence tracing one continuous inward spiral.
///
/// Produced once by [`generate`](crate::spiral::generate) and read-only
/// afterwards: export, plotting, and resistance estimation all consume it
/// without mutation. The path is open; consecutive points are connected by
/// straight segments and there is no closing segment back to the start.
#[derive(Debug, Clone, PartialEq)]
pub struct CoilPath(LineString<Real>);

impl CoilPath {
    /// Wrap an ordered point sequence as a coil path.
    pub const fn new(points: LineString<Real>) -> Self {
        CoilPath(points)
    }

    /// Number of points in the path.
    pub fn len(&self) -> usize {
        self.0.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.0.is_empty()
    }

    /// Iterate the points in emission order.
    pub fn points(&self) -> impl Iterator<Item = Coord<Real>> + '_ {
        self.0.coords().copied()
    }

    /// Total Euclidean length of the open path, in the path's linear unit.
    pub fn total_length(&self) -> Real {
        self.0.euclidean_length()
    }

    /// Axis-aligned bounding rectangle, `None` for an empty path.
    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        self.0.bounding_rect()
    }
}

impl From<LineString<Real>> for CoilPath {
    fn from(points: LineString<Real>) -> Self {
        CoilPath::new(points)
    }
}

impl From<CoilPath> for LineString<Real> {
    fn from(path: CoilPath) -> Self {
        path.0
    }
}
