//! # Rendering Module
//!
//! Turns parameter sets into normal map rasters.
//!
//! ## Modules
//!
//! - [`normal_map`]: The per-texel rasterizer and its RGBA buffer
//! - [`preview`]: PNG export
//!
//! ## Usage Example
//!
//! ```
//! use fluted::params::ParameterSet;
//! use fluted::render::normal_map::NormalMapRasterizer;
//! use fluted::shader::NoisePrimitive;
//!
//! let noise = NoisePrimitive::new(42);
//! let rasterizer = NormalMapRasterizer::new(&noise);
//!
//! let map = rasterizer.generate(&ParameterSet::default(), 256)?;
//! assert_eq!(map.as_bytes().len(), 256 * 256 * 4);
//! # Ok::<(), fluted::FlutedError>(())
//! ```

pub mod normal_map;
pub mod preview;
