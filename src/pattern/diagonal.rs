//! # Diagonal Flutes
//!
//! Straight 45° bands. At integral density the bands repeat exactly across
//! the raster edge in both directions.
//!
//! ## Formula
//!
//! ```text
//! phase = (u + v) · density
//! ```
//!
//! Each axis term is reduced mod 1 on its own with [`wrapped_cycles`], so a
//! shift by one band period along either axis reproduces the phase exactly.

use crate::params::ParameterSet;
use crate::shader::wrapped_cycles;

/// Phase at texel `(x, y)`, in [0, 2).
pub fn phase(x: f64, y: f64, params: &ParameterSet, size: f64) -> f64 {
    wrapped_cycles(x, params.density, size) + wrapped_cycles(y, params.density, size)
}
