//! Trace geometry for planar polygonal spiral inductors (NFC / RFID antenna
//! coils, wireless power coils), built around a single inward-spiral point
//! generator and a DC resistance estimate from trace geometry and resistivity.
//!
//! The spiral is an ordered, open, piecewise-linear point sequence: one
//! traversal of the polygon corners per turn, stepping the radius inward
//! according to a [`ShrinkPolicy`](coil::ShrinkPolicy).
//!
//! ```rust
//! use coilgen::float_types::COPPER_RESISTIVITY;
//! use coilgen::{CoilSpecification, estimate_resistance, generate};
//!
//! let spec = CoilSpecification::default();
//! let coil = generate(&spec)?;
//! let ohms = estimate_resistance(&coil, spec.trace_width, spec.trace_thickness, COPPER_RESISTIVITY)?;
//! assert!(ohms > 0.0);
//! # Ok::<(), coilgen::errors::InvalidSpecification>(())
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): `.dxf` export
//! - **svg-io**: `.svg` plot export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod coil;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod resistance;
pub mod spiral;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use coil::{CoilPath, CoilSpecification, ShrinkPolicy};
pub use resistance::estimate_resistance;
pub use spiral::generate;
