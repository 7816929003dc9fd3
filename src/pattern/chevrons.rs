//! # Chevrons
//!
//! Stacked V shapes, one per unit cell of the density grid.
//!
//! ## Formula
//!
//! ```text
//! cell  = (u, v) · density
//! x'    = |fract(cell.x) − 0.5|
//! phase = |fract(cell.y) − x'| · 4
//! ```

use crate::params::ParameterSet;
use crate::shader::{fract, normalize01};

/// Phase at texel `(x, y)`.
pub fn phase(x: f64, y: f64, params: &ParameterSet, size: f64) -> f64 {
    let cx = normalize01(x, size) * params.density;
    let cy = normalize01(y, size) * params.density;

    let fold = (fract(cx) - 0.5).abs();
    (fract(cy) - fold).abs() * 4.0
}
