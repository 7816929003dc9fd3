//! Coordinate transformation functions.

use std::f64::consts::TAU;

/// Convert texel coordinates to center-relative coordinates.
///
/// Maps (0, 0) to (-width/2, -height/2) and (width, height) to (width/2, height/2).
#[inline]
pub fn center_coords(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    (x - width / 2.0, y - height / 2.0)
}

/// Normalize a coordinate to [0, 1] range.
#[inline]
pub fn normalize01(coord: f64, size: f64) -> f64 {
    coord / size
}

/// Convert Cartesian coordinates to polar.
///
/// # Returns
/// (radius, angle) where angle is in radians [-PI, PI]
#[inline]
pub fn cart_to_polar(x: f64, y: f64) -> (f64, f64) {
    let r = (x * x + y * y).sqrt();
    let theta = y.atan2(x);
    (r, theta)
}

/// Cycles of `density` per `size` at `coord`, reduced to [0, 1).
///
/// Multiplies before reducing, so for whole-number `coord` and `density` the
/// intermediate `coord · density` is an exact integer and `coord + size`
/// lands on the bit-identical result. This is what keeps wrap-addressed
/// tiles seamless at any raster size, not just powers of two.
#[inline]
pub fn wrapped_cycles(coord: f64, density: f64, size: f64) -> f64 {
    (coord * density).rem_euclid(size) / size
}

/// Fractional part, always in [0, 1) (GLSL `fract`).
#[inline]
pub fn fract(v: f64) -> f64 {
    v - v.floor()
}

/// Floored modulo (GLSL `mod`): the result takes the sign of `m`.
#[inline]
pub fn mod_floor(v: f64, m: f64) -> f64 {
    v - m * (v / m).floor()
}

/// Fold an angle into a single wedge of a `segments`-way mirror.
///
/// Returns the distance from the wedge's center line, in [0, sector/2].
#[inline]
pub fn fold_sector(angle: f64, segments: u32) -> f64 {
    let sector = TAU / segments as f64;
    (mod_floor(angle, sector) - sector / 2.0).abs()
}
