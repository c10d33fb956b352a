//! Test support library
//! Provides various helper functions & utilities for tests.

use coilgen::CoilPath;
use coilgen::float_types::Real;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Distance of the path point at `index` from the origin.
pub fn radius_at(path: &CoilPath, index: usize) -> Real {
    let point = path.points().nth(index).unwrap();
    point.x.hypot(point.y)
}
