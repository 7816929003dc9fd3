//! # Pattern Fields
//!
//! Each pattern is a pure function from a (possibly warped) texel coordinate
//! to a [`FieldSample`]. Five patterns produce a scalar phase that is shaped
//! by a [`RidgeProfile`](crate::ridge::RidgeProfile); [`tiles`] alone emits a
//! tilt vector directly.
//!
//! ## Coordinates
//!
//! Coordinates arrive in texel units on an `size × size` raster. Patterns
//! anchored to the corner use `x / size`, `y / size`; the kaleidoscope and
//! hexagon patterns are anchored on the raster center.
//!
//! ## Adding a New Pattern
//!
//! 1. Create `src/pattern/mypattern.rs` with a `phase` (or `tilt`) function
//! 2. Add `pub mod mypattern;` below
//! 3. Add a [`PatternType`] variant, its name, and a [`PATTERNS`] entry
//! 4. Dispatch to it from [`evaluate`]

pub mod chevrons;
pub mod diagonal;
pub mod hexagon;
pub mod kaleidoscope;
pub mod linear;
pub mod tiles;

use crate::params::ParameterSet;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout of the flutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    #[default]
    Linear,
    Kaleidoscope,
    Chevrons,
    Diagonal,
    Hexagon,
    Tiles,
}

/// All patterns, in display order.
pub const PATTERNS: &[PatternType] = &[
    PatternType::Linear,
    PatternType::Kaleidoscope,
    PatternType::Chevrons,
    PatternType::Diagonal,
    PatternType::Hexagon,
    PatternType::Tiles,
];

impl PatternType {
    /// Lowercase name, e.g. "hexagon".
    pub fn name(self) -> &'static str {
        match self {
            PatternType::Linear => "linear",
            PatternType::Kaleidoscope => "kaleidoscope",
            PatternType::Chevrons => "chevrons",
            PatternType::Diagonal => "diagonal",
            PatternType::Hexagon => "hexagon",
            PatternType::Tiles => "tiles",
        }
    }

    /// Look up a pattern by name (case insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        PATTERNS.iter().copied().find(|p| p.name() == name)
    }

    /// Look up a pattern by name, falling back to [`PatternType::Linear`].
    pub fn by_name_or_default(name: &str) -> Self {
        Self::by_name(name).unwrap_or_else(|| {
            tracing::warn!(pattern = name, "unknown pattern type, using linear");
            Self::default()
        })
    }

    /// Look up a pattern by its position in [`PATTERNS`], falling back to
    /// [`PatternType::Linear`] when out of range.
    pub fn from_index(index: usize) -> Self {
        PATTERNS.get(index).copied().unwrap_or_else(|| {
            tracing::warn!(index, "pattern index out of range, using linear");
            Self::default()
        })
    }

    /// Whether this pattern emits a tilt vector instead of a phase.
    pub fn is_vector(self) -> bool {
        matches!(self, PatternType::Tiles)
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternType {
    type Err = std::convert::Infallible;

    /// Never fails: unknown names become [`PatternType::Linear`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::by_name_or_default(s))
    }
}

impl<'de> Deserialize<'de> for PatternType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::by_name_or_default(&name))
    }
}

/// Output of a pattern at one coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldSample {
    /// Cyclic phase (period 1), to be shaped by a ridge profile.
    Phase(f64),
    /// Tilt vector `(nx, ny)`, used as-is.
    Vector(f64, f64),
}

/// Evaluate `params.pattern_type` at texel coordinate `(x, y)`.
///
/// `params` must already be sanitized (see [`ParameterSet::sanitized`]).
#[inline]
pub fn evaluate(x: f64, y: f64, params: &ParameterSet, size: f64) -> FieldSample {
    match params.pattern_type {
        PatternType::Linear => FieldSample::Phase(linear::phase(x, y, params, size)),
        PatternType::Kaleidoscope => FieldSample::Phase(kaleidoscope::phase(x, y, params, size)),
        PatternType::Chevrons => FieldSample::Phase(chevrons::phase(x, y, params, size)),
        PatternType::Diagonal => FieldSample::Phase(diagonal::phase(x, y, params, size)),
        PatternType::Hexagon => FieldSample::Phase(hexagon::phase(x, y, params, size)),
        PatternType::Tiles => {
            let (nx, ny) = tiles::tilt(x, y, params, size);
            FieldSample::Vector(nx, ny)
        }
    }
}
