//! # Linear Flutes
//!
//! Vertical reeds running the height of the raster, optionally swayed by a
//! sine wave and bowed by a bell-shaped curvature term.
//!
//! ## Formula
//!
//! ```text
//! freq   = round(wave_frequency)
//! offset = sin(v · 2π · freq) · wave_amplitude
//! bell   = (1 − cos(v · 2π)) · 0.5
//! phase  = (u + offset + bell · curvature) · density
//! ```
//!
//! Rounding the wave frequency keeps the sway periodic in `v`, so the top and
//! bottom edges meet without a seam.
//!
//! The `u · density` term is taken mod 1 through [`wrapped_cycles`] before
//! the row terms are added, so every texel one flute period apart gets a
//! bit-identical phase.

use crate::params::ParameterSet;
use crate::shader::{normalize01, wrapped_cycles};
use std::f64::consts::TAU;

/// Phase at texel `(x, y)`, in [0, 1) plus the row's sway and bow.
pub fn phase(x: f64, y: f64, params: &ParameterSet, size: f64) -> f64 {
    let v = normalize01(y, size);

    let freq = params.wave_frequency.round();
    let offset = (v * TAU * freq).sin() * params.wave_amplitude;
    let bell = (1.0 - (v * TAU).cos()) * 0.5;
    let row = (offset + bell * params.curvature) * params.density;

    wrapped_cycles(x, params.density, size) + row
}
