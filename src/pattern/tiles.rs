//! # Tilted Tiles
//!
//! A grid of flat tiles, each tilted in its own direction. The tilt comes
//! straight from a hash of the tile's integer coordinates, so this pattern
//! skips the ridge profile and emits the tilt vector itself.
//!
//! ## Formula
//!
//! ```text
//! cell  = floor((u, v) · density)          wrapped mod density when integral
//! angle = hash(cell) · 2π
//! tilt  = (cos angle, sin angle)
//! ```

use crate::params::ParameterSet;
use crate::shader::{grid_cell, hash2_unit};
use std::f64::consts::TAU;

/// Tilt angle of the tile at integer cell `(cx, cy)`.
///
/// Depends on the cell coordinates alone.
#[inline]
pub fn tile_angle(cx: i32, cy: i32) -> f64 {
    hash2_unit(cx, cy) * TAU
}

/// Integer cell containing texel `(x, y)`.
///
/// When `density` is a whole number the cell indices wrap modulo it, so the
/// tile grid repeats exactly once per raster. Coordinates are scaled by
/// density before dividing by size, so whole-number inputs land exactly on
/// cell boundaries at any raster size.
pub fn tile_cell(x: f64, y: f64, density: f64, size: f64) -> (i32, i32) {
    let (cx, cy) = grid_cell(x * density / size, y * density / size);
    if density >= 1.0 && density.fract() == 0.0 && density <= i32::MAX as f64 {
        let period = density as i32;
        (cx.rem_euclid(period), cy.rem_euclid(period))
    } else {
        (cx, cy)
    }
}

/// Tilt vector at texel `(x, y)`.
pub fn tilt(x: f64, y: f64, params: &ParameterSet, size: f64) -> (f64, f64) {
    let (cx, cy) = tile_cell(x, y, params.density, size);
    let angle = tile_angle(cx, cy);
    (angle.cos(), angle.sin())
}
