//! # Kaleidoscope
//!
//! Radial flutes mirrored into `segment_count` wedges around the raster
//! center, with a ring-shaped sine twist.
//!
//! ## Formula
//!
//! ```text
//! (r, a) = polar((x, y) − center) / size
//! a'     = a + sin(r · 2π · wave_frequency) · wave_amplitude
//! sector = 2π / segment_count
//! phase  = |mod(a', sector) − sector/2| · density · 3
//! ```

use crate::params::{MIN_SEGMENTS, ParameterSet};
use crate::shader::{cart_to_polar, center_coords, fold_sector};
use std::f64::consts::TAU;

/// Phase at texel `(x, y)`.
pub fn phase(x: f64, y: f64, params: &ParameterSet, size: f64) -> f64 {
    let (cx, cy) = center_coords(x, y, size, size);
    let (r, a) = cart_to_polar(cx / size, cy / size);

    let twisted = a + (r * TAU * params.wave_frequency).sin() * params.wave_amplitude;
    let segments = params.segment_count.max(MIN_SEGMENTS) as u32;

    fold_sector(twisted, segments) * params.density * 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternType;

    fn params(segments: i32) -> ParameterSet {
        ParameterSet {
            pattern_type: PatternType::Kaleidoscope,
            segment_count: segments,
            wave_amplitude: 0.0,
            density: 2.0,
            ..ParameterSet::default()
        }
    }

    #[test]
    fn test_rotational_symmetry() {
        // Rotating by one sector about the center leaves the phase unchanged
        let p = params(4);
        let size = 64.0;
        let (x, y) = (32.0 + 11.0, 32.0 + 5.0);
        let rotated = (32.0 - 5.0, 32.0 + 11.0);
        let a = phase(x, y, &p, size);
        let b = phase(rotated.0, rotated.1, &p, size);
        assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
    }

    #[test]
    fn test_phase_bounded_by_half_sector() {
        let p = params(6);
        let max = TAU / 6.0 / 2.0 * p.density * 3.0;
        for y in 0..32 {
            for x in 0..32 {
                let v = phase(x as f64 * 2.0, y as f64 * 2.0, &p, 64.0);
                assert!(v >= 0.0 && v <= max + 1e-9);
            }
        }
    }

    #[test]
    fn test_segment_count_clamped() {
        let a = phase(40.0, 21.0, &params(0), 64.0);
        let b = phase(40.0, 21.0, &params(2), 64.0);
        assert_eq!(a, b);
    }
}
