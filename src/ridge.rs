//! # Ridge Profiles
//!
//! A ridge profile turns a cyclic phase into the signed tilt of one flute.
//! All profiles have period 1 in phase.
//!
//! ```text
//! round     cos(2πt)                       smooth rounded flutes
//! sharp     triangle wave                  V-shaped creases
//! square    ±0.8 by sign of cos(2πt)       hard-edged steps
//! bezel     trapezoid, flat middle 60%     bevelled glass edges
//! sawtooth  2·fract(t) − 1                 one-sided ramps, hard reset
//! double    cos(4πt)                       two flutes per period
//! ```
//!
//! `square` and `sawtooth` are intentionally discontinuous.

use crate::shader::{wave_cos, wave_cos_harmonic, wave_sawtooth, wave_square, wave_trapezoid, wave_triangle};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Height of the square profile's steps.
pub const SQUARE_LEVEL: f64 = 0.8;

/// Fraction of the bezel swing that stays flat.
pub const BEZEL_FLAT: f64 = 0.6;

/// Cross-section shape of each flute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RidgeProfile {
    #[default]
    Round,
    Sharp,
    Square,
    Bezel,
    Sawtooth,
    Double,
}

/// All profiles, in display order.
pub const PROFILES: &[RidgeProfile] = &[
    RidgeProfile::Round,
    RidgeProfile::Sharp,
    RidgeProfile::Square,
    RidgeProfile::Bezel,
    RidgeProfile::Sawtooth,
    RidgeProfile::Double,
];

impl RidgeProfile {
    /// Lowercase name, e.g. "bezel".
    pub fn name(self) -> &'static str {
        match self {
            RidgeProfile::Round => "round",
            RidgeProfile::Sharp => "sharp",
            RidgeProfile::Square => "square",
            RidgeProfile::Bezel => "bezel",
            RidgeProfile::Sawtooth => "sawtooth",
            RidgeProfile::Double => "double",
        }
    }

    /// Look up a profile by name (case insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        PROFILES.iter().copied().find(|p| p.name() == name)
    }

    /// Look up a profile by name, falling back to [`RidgeProfile::Round`].
    pub fn by_name_or_default(name: &str) -> Self {
        Self::by_name(name).unwrap_or_else(|| {
            tracing::warn!(profile = name, "unknown ridge profile, using round");
            Self::default()
        })
    }

    /// Look up a profile by its position in [`PROFILES`], falling back to
    /// [`RidgeProfile::Round`] when out of range.
    pub fn from_index(index: usize) -> Self {
        PROFILES.get(index).copied().unwrap_or_else(|| {
            tracing::warn!(index, "ridge profile index out of range, using round");
            Self::default()
        })
    }

    /// Shape a phase into a signed tilt in [-1, 1].
    #[inline]
    pub fn shape(self, phase: f64) -> f64 {
        let t = phase.rem_euclid(1.0);
        match self {
            RidgeProfile::Round => wave_cos(t),
            RidgeProfile::Sharp => wave_triangle(t),
            RidgeProfile::Square => wave_square(t, SQUARE_LEVEL),
            RidgeProfile::Bezel => wave_trapezoid(t, BEZEL_FLAT),
            RidgeProfile::Sawtooth => wave_sawtooth(t),
            RidgeProfile::Double => wave_cos_harmonic(t, 2.0),
        }
    }
}

impl fmt::Display for RidgeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RidgeProfile {
    type Err = std::convert::Infallible;

    /// Never fails: unknown names become [`RidgeProfile::Round`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::by_name_or_default(s))
    }
}

impl<'de> Deserialize<'de> for RidgeProfile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::by_name_or_default(&name))
    }
}
