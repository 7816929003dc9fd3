//! # Shader Primitives Library
//!
//! Building blocks for the normal map patterns. These functions mirror
//! common operations found in fragment shaders and are composed by
//! [`crate::pattern`] and [`crate::ridge`].
//!
//! ## Categories
//!
//! - [`noise`]: Integer hashes and seeded simplex noise
//! - [`distort`]: Noise-driven domain warping
//! - [`transform`]: Centering, polar conversion, fract/mod, sector folding
//! - [`grid`]: Unit cells and the two-lattice hexagon search
//! - [`wave`]: Cosine, triangle, sawtooth, square and trapezoid waves
//!
//! ## Example
//!
//! ```rust
//! use fluted::shader::*;
//!
//! let noise = NoisePrimitive::new(1);
//! let warper = DomainWarper::new(&noise);
//! let (x, y) = warper.warp(12.0, 40.0, 0.2);
//! let ridge = wave_triangle(fract(x / 64.0 * 8.0));
//! assert!((-1.0..=1.0).contains(&ridge));
//! # let _ = y;
//! ```

pub mod distort;
pub mod grid;
pub mod noise;
pub mod transform;
pub mod wave;

// Re-export all primitives at the top level for convenience
pub use distort::*;
pub use grid::*;
pub use noise::*;
pub use transform::*;
pub use wave::*;
