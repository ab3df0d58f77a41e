// src/lib.rs

//! # Argand
//!
//! Immutable complex arithmetic with a transcendental function library and
//! domain coloring.
//!
//! ## Design Philosophy
//!
//! **Everything is derived from one exponential.**
//!
//! The value type carries the field operations plus a branch-consistent
//! complex power. `exp` and `ln` are the only transcendental primitives;
//! the entire trig/hyperbolic/inverse zoo is algebraic composition on top
//! of them, so every function shares one principal-branch convention. The
//! domain-coloring map and the plotting surface consume values without the
//! core knowing anything about pixels.
//!
//! ```
//! use argand::{functions, Complex};
//!
//! let z = Complex::new(1.0, 1.0);
//! let w = functions::sin(z) / functions::cos(z);
//! assert!((w.re - functions::tan(z).re).abs() < 1e-12);
//! ```

/// Domain coloring and color types.
pub mod color;
/// The immutable complex value type.
pub mod complex;
/// Plot configuration and the plottable-function registry.
pub mod config;
/// Elementary and transcendental functions.
pub mod functions;
/// Grid sampling and color sinks.
pub mod surface;

pub use color::{domain_color, Rgb, Rgba8};
pub use complex::{Complex, OMEGA};
pub use config::{FunctionKind, PlotConfig};
pub use surface::{render, ColorSink, ImageBuffer, Viewport};
