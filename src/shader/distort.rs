//! Noise-driven domain warping.
//!
//! Warping displaces the sample coordinate before a pattern is evaluated,
//! bending rigid stripes and lattices into something that looks poured.

use super::noise::NoisePrimitive;

/// Spatial scale applied to texel coordinates before sampling the noise.
pub const WARP_SCALE: f64 = 0.005;

/// Displacement, in texels, per unit of fluidity.
pub const WARP_STRENGTH: f64 = 30.0;

/// Offset between the x and y noise lookups, so the two displacement
/// components come from uncorrelated regions of the field.
pub const WARP_DECORRELATE: f64 = 1000.0;

/// Perturbs sample coordinates with a borrowed noise field.
#[derive(Debug, Clone, Copy)]
pub struct DomainWarper<'a> {
    noise: &'a NoisePrimitive,
}

impl<'a> DomainWarper<'a> {
    pub fn new(noise: &'a NoisePrimitive) -> Self {
        Self { noise }
    }

    /// Warp `(x, y)` by `fluidity`.
    ///
    /// # Parameters
    /// - `x`, `y`: Coordinates in texel units
    /// - `fluidity`: Warp amount; 0 returns the input untouched
    ///
    /// # Returns
    /// Warped (x, y) coordinates
    #[inline]
    pub fn warp(&self, x: f64, y: f64, fluidity: f64) -> (f64, f64) {
        if fluidity == 0.0 {
            return (x, y);
        }

        let strength = fluidity * WARP_STRENGTH;
        let sx = x * WARP_SCALE;
        let sy = y * WARP_SCALE;
        let dx = self.noise.sample(sx, sy);
        let dy = self.noise.sample(sx + WARP_DECORRELATE, sy + WARP_DECORRELATE);

        (x + strength * dx, y + strength * dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_fluidity_is_identity() {
        let noise = NoisePrimitive::default();
        let warper = DomainWarper::new(&noise);
        for &(x, y) in &[(0.0, 0.0), (1.5, -3.25), (1e9, 7.0), (0.1 + 0.2, f64::MIN_POSITIVE)] {
            let (wx, wy) = warper.warp(x, y, 0.0);
            assert_eq!(wx.to_bits(), x.to_bits());
            assert_eq!(wy.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn test_displacement_bounded_by_strength() {
        let noise = NoisePrimitive::default();
        let warper = DomainWarper::new(&noise);
        let fluidity = 0.5;
        let limit = fluidity * WARP_STRENGTH;
        for i in 0..100 {
            let (x, y) = (i as f64 * 13.0, i as f64 * 7.0);
            let (wx, wy) = warper.warp(x, y, fluidity);
            assert!((wx - x).abs() <= limit + 1e-9);
            assert!((wy - y).abs() <= limit + 1e-9);
        }
    }

    #[test]
    fn test_axes_not_degenerate() {
        let noise = NoisePrimitive::default();
        let warper = DomainWarper::new(&noise);
        let mut differs = 0;
        for i in 0..100 {
            let (x, y) = (i as f64 * 11.0, i as f64 * 5.0);
            let (wx, wy) = warper.warp(x, y, 1.0);
            if ((wx - x) - (wy - y)).abs() > 1e-6 {
                differs += 1;
            }
        }
        assert!(differs > 90, "x and y displacement should be decorrelated");
    }

    #[test]
    fn test_warp_deterministic() {
        let noise = NoisePrimitive::new(11);
        let warper = DomainWarper::new(&noise);
        assert_eq!(warper.warp(40.0, 17.0, 0.3), warper.warp(40.0, 17.0, 0.3));
    }
}
