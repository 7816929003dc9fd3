//! # Hexagonal Cells
//!
//! Honeycomb dimples centered on the raster center. The nearest cell center
//! comes from [`hex_nearest`], which resolves exact ties between its two
//! lattices the same way every time so the switch line never shows.
//!
//! ## Formula
//!
//! ```text
//! cols  = max(1, round(density))
//! rows  = max(1, round(density / √3))
//! p     = (wrap(x − cx, cols), wrap(y − cy, rows) · √3)
//! d     = min(|p − A|², |p − B|²)      A, B: offset 1 × √3 lattices
//! phase = 2 · d
//! ```
//!
//! `wrap` is [`wrapped_cycles`]: the raster holds exactly `cols` lattice
//! periods across and `rows` down, so the honeycomb repeats seamlessly in
//! both directions. The cells are stretched slightly vertically (or
//! squashed) to fit; the closer `density / √3` is to a whole number, the
//! more regular they are.

use crate::params::ParameterSet;
use crate::shader::{HEX_ROW, hex_nearest, wrapped_cycles};

/// Lattice periods `(across, down)` that fit the raster at `density`.
pub fn lattice_dims(density: f64) -> (u32, u32) {
    let cols = density.round().max(1.0);
    let rows = (density / HEX_ROW).round().max(1.0);
    (cols as u32, rows as u32)
}

/// Phase at texel `(x, y)`.
pub fn phase(x: f64, y: f64, params: &ParameterSet, size: f64) -> f64 {
    let (cols, rows) = lattice_dims(params.density);
    let half = size / 2.0;
    let px = wrapped_cycles(x - half, cols as f64, size);
    let py = wrapped_cycles(y - half, rows as f64, size) * HEX_ROW;

    2.0 * hex_nearest(px, py).dist_sq
}
