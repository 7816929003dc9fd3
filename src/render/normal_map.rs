//! # Normal Map Rasterizer
//!
//! Walks every texel of an `N × N` grid, runs it through the warp, pattern
//! and ridge profile, and packs the resulting tilt into RGBA bytes.
//!
//! ## Encoding
//!
//! ```text
//! R = round((nx · 0.5 + 0.5) · 255)     horizontal tilt
//! G = round((ny · 0.5 + 0.5) · 255)     vertical tilt (0 except for tiles)
//! B = 255                               constant "up"
//! A = 255                               always opaque
//! ```
//!
//! Decoding a channel is `v = byte / 255 · 2 − 1`.
//!
//! ## Parallelism
//!
//! No texel reads another texel's result, so rows are filled independently
//! on the rayon pool. Output does not depend on thread count or order.

use crate::error::FlutedError;
use crate::params::ParameterSet;
use crate::pattern::{self, FieldSample};
use crate::shader::{DomainWarper, NoisePrimitive};
use rayon::prelude::*;
use std::time::Instant;

/// Bytes per texel.
pub const CHANNELS: usize = 4;

/// Encode a tilt component in [-1, 1] as a byte.
#[inline]
pub fn encode_component(v: f64) -> u8 {
    ((v * 0.5 + 0.5) * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Decode a byte back to a tilt component in [-1, 1].
#[inline]
pub fn decode_component(byte: u8) -> f64 {
    byte as f64 / 255.0 * 2.0 - 1.0
}

/// Encode a tilt vector as an RGBA texel.
#[inline]
pub fn encode_texel(nx: f64, ny: f64) -> [u8; 4] {
    [encode_component(nx), encode_component(ny), 255, 255]
}

/// An owned, square RGBA8 normal map.
///
/// Rows are stored top to bottom, texels left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalMapBuffer {
    resolution: u32,
    data: Vec<u8>,
}

impl NormalMapBuffer {
    /// Side length in texels.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Raw RGBA bytes, `resolution² · 4` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take ownership of the raw RGBA bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// RGBA texel at `(x, y)`, or `None` outside the raster.
    pub fn texel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.resolution || y >= self.resolution {
            return None;
        }
        let i = (y as usize * self.resolution as usize + x as usize) * CHANNELS;
        let t = &self.data[i..i + CHANNELS];
        Some([t[0], t[1], t[2], t[3]])
    }

    /// Decoded `(nx, ny)` tilt at `(x, y)`.
    pub fn perturbation(&self, x: u32, y: u32) -> Option<(f64, f64)> {
        self.texel(x, y)
            .map(|t| (decode_component(t[0]), decode_component(t[1])))
    }

    /// Iterate over texels in row-major order.
    pub fn texels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|t| [t[0], t[1], t[2], t[3]])
    }
}

/// Allocate a zeroed buffer for `resolution`, failing instead of aborting
/// when the size overflows or the allocator refuses.
fn allocate(resolution: u32) -> Result<Vec<u8>, FlutedError> {
    let exhausted = || FlutedError::ResourceExhausted { resolution };

    let n = resolution as usize;
    let len = n
        .checked_mul(n)
        .and_then(|t| t.checked_mul(CHANNELS))
        .ok_or_else(exhausted)?;

    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| exhausted())?;
    data.resize(len, 0);
    Ok(data)
}

/// Produces normal maps from parameter sets.
///
/// Holds only a borrowed noise field, so one rasterizer (or many sharing the
/// same [`NoisePrimitive`]) can serve concurrent calls.
#[derive(Debug, Clone, Copy)]
pub struct NormalMapRasterizer<'a> {
    warper: DomainWarper<'a>,
}

impl<'a> NormalMapRasterizer<'a> {
    pub fn new(noise: &'a NoisePrimitive) -> Self {
        Self {
            warper: DomainWarper::new(noise),
        }
    }

    /// Compute the tilt `(nx, ny)` at texel `(x, y)`.
    ///
    /// `params` must already be sanitized.
    #[inline]
    pub fn shade(&self, x: u32, y: u32, params: &ParameterSet, size: f64) -> (f64, f64) {
        let (wx, wy) = self.warper.warp(x as f64, y as f64, params.fluidity);

        match pattern::evaluate(wx, wy, params, size) {
            FieldSample::Vector(nx, ny) => (nx, ny),
            FieldSample::Phase(phase) => (params.ridge_profile.shape(phase), 0.0),
        }
    }

    /// Render a full `resolution × resolution` normal map.
    ///
    /// Parameters are sanitized first; a resolution of 0 is raised to 1.
    /// Fails only with [`FlutedError::ResourceExhausted`].
    pub fn generate(
        &self,
        params: &ParameterSet,
        resolution: u32,
    ) -> Result<NormalMapBuffer, FlutedError> {
        let started = Instant::now();
        let params = params.sanitized();
        let resolution = resolution.max(1);
        let size = resolution as f64;

        let mut data = allocate(resolution)?;
        let row_bytes = resolution as usize * CHANNELS;

        data.par_chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, texel) in row.chunks_exact_mut(CHANNELS).enumerate() {
                    let (nx, ny) = self.shade(x as u32, y as u32, &params, size);
                    texel.copy_from_slice(&encode_texel(nx, ny));
                }
            });

        tracing::debug!(
            resolution,
            pattern = %params.pattern_type,
            profile = %params.ridge_profile,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "generated normal map"
        );

        Ok(NormalMapBuffer { resolution, data })
    }
}

/// Render with a default-seeded noise field.
///
/// Convenience for callers that do not care about the warp seed.
pub fn generate(params: &ParameterSet, resolution: u32) -> Result<NormalMapBuffer, FlutedError> {
    let noise = NoisePrimitive::default();
    NormalMapRasterizer::new(&noise).generate(params, resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternType;
    use crate::ridge::RidgeProfile;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component(1.0), 255);
        assert_eq!(encode_component(-1.0), 0);
        assert_eq!(encode_component(0.0), 128);
        assert_eq!(encode_component(2.0), 255);
        assert_eq!(encode_component(-7.0), 0);
    }

    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component(255), 1.0);
        assert_eq!(decode_component(0), -1.0);
        assert!((decode_component(128) - 0.0039).abs() < 1e-3);
    }

    #[test]
    fn test_encode_texel_fixed_channels() {
        assert_eq!(&encode_texel(0.3, -0.3)[2..], &[255, 255]);
    }

    #[test]
    fn test_allocate_overflow_is_error() {
        // u32::MAX² · 4 overflows usize on 64-bit targets
        let err = allocate(u32::MAX).unwrap_err();
        assert!(matches!(err, FlutedError::ResourceExhausted { resolution: u32::MAX }));
    }

    #[test]
    fn test_texel_bounds() {
        let map = generate(&ParameterSet::default(), 8).unwrap();
        assert!(map.texel(7, 7).is_some());
        assert!(map.texel(8, 0).is_none());
        assert!(map.texel(0, 8).is_none());
        assert_eq!(map.texels().count(), 64);
    }

    #[test]
    fn test_zero_resolution_raised_to_one() {
        let map = generate(&ParameterSet::default(), 0).unwrap();
        assert_eq!(map.resolution(), 1);
        assert_eq!(map.as_bytes().len(), 4);
    }

    #[test]
    fn test_non_tiles_have_flat_green() {
        let params = ParameterSet {
            pattern_type: PatternType::Chevrons,
            ridge_profile: RidgeProfile::Bezel,
            ..ParameterSet::default()
        };
        let map = generate(&params, 16).unwrap();
        assert!(map.texels().all(|t| t[1] == 128));
    }

    #[test]
    fn test_tiles_bypass_profile() {
        let base = ParameterSet {
            pattern_type: PatternType::Tiles,
            density: 4.0,
            ..ParameterSet::default()
        };
        let other = ParameterSet {
            ridge_profile: RidgeProfile::Sawtooth,
            ..base.clone()
        };
        assert_eq!(generate(&base, 32).unwrap(), generate(&other, 32).unwrap());
    }

    #[test]
    fn test_shade_matches_buffer() {
        let noise = NoisePrimitive::new(3);
        let raster = NormalMapRasterizer::new(&noise);
        let params = ParameterSet {
            fluidity: 0.4,
            pattern_type: PatternType::Kaleidoscope,
            ..ParameterSet::default()
        };
        let map = raster.generate(&params, 24).unwrap();
        let (nx, ny) = raster.shade(5, 17, &params, 24.0);
        assert_eq!(map.texel(5, 17), Some(encode_texel(nx, ny)));
    }
}
