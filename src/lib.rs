//! # Fluted - Procedural Fluted-Glass Normal Maps
//!
//! Fluted synthesizes tileable normal maps for reeded and fluted glass
//! effects. A [`ParameterSet`] goes in, an RGBA8 [`NormalMapBuffer`] comes
//! out; a renderer samples it as a wrap-addressed texture to bend whatever
//! is behind the glass.
//!
//! - **Patterns**: linear reeds, kaleidoscope, chevrons, diagonal, hexagon, tiles
//! - **Ridge profiles**: round, sharp, square, bezel, sawtooth, double
//! - **Fluidity**: simplex-noise domain warping for a poured-glass look
//!
//! ## Quick Start
//!
//! ```
//! use fluted::{NoisePrimitive, NormalMapRasterizer, ParameterSet};
//! use fluted::pattern::PatternType;
//! use fluted::ridge::RidgeProfile;
//!
//! // One noise field per process, shared by reference
//! let noise = NoisePrimitive::new(7);
//! let rasterizer = NormalMapRasterizer::new(&noise);
//!
//! let params = ParameterSet {
//!     pattern_type: PatternType::Hexagon,
//!     ridge_profile: RidgeProfile::Bezel,
//!     density: 6.0,
//!     ..ParameterSet::default()
//! };
//!
//! let map = rasterizer.generate(&params, 128)?;
//! let [r, g, b, a] = map.texel(0, 0).unwrap();
//! assert_eq!((b, a), (255, 255));
//! # let _ = (r, g);
//! # Ok::<(), fluted::FlutedError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`params`] | Parameter set, clamping, JSON and string setters |
//! | [`pattern`] | The six pattern fields |
//! | [`ridge`] | The six ridge profiles |
//! | [`render`] | Rasterizer, RGBA buffer, PNG export |
//! | [`shader`] | Noise, warping and math primitives |
//! | [`error`] | Error types |

pub mod error;
pub mod params;
pub mod pattern;
pub mod render;
pub mod ridge;
pub mod shader;

// Re-exports for convenience
pub use error::FlutedError;
pub use params::ParameterSet;
pub use render::normal_map::{NormalMapBuffer, NormalMapRasterizer};
pub use shader::NoisePrimitive;
