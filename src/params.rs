//! # Parameter Set
//!
//! Everything that shapes a normal map, as one plain value. Parameter sets
//! come from sliders, JSON files, or the command line, so nothing here ever
//! rejects a value: out-of-range numbers are clamped by [`ParameterSet::sanitized`]
//! and unknown pattern/profile names fall back to their defaults.
//!
//! ## JSON Shape
//!
//! ```json
//! {
//!   "density": 12.0,
//!   "waveFrequency": 3.0,
//!   "waveAmplitude": 0.02,
//!   "patternType": "linear",
//!   "segmentCount": 8,
//!   "ridgeProfile": "round",
//!   "curvature": 0.0,
//!   "fluidity": 0.0
//! }
//! ```
//!
//! Missing fields take their defaults.

use crate::pattern::{PATTERNS, PatternType};
use crate::ridge::{PROFILES, RidgeProfile};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest density a sanitized parameter set carries.
pub const MIN_DENSITY: f64 = 1e-3;

/// Smallest kaleidoscope segment count.
pub const MIN_SEGMENTS: i32 = 2;

/// Inputs to the normal map synthesizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParameterSet {
    /// Flutes per raster width. Default: 12.0
    pub density: f64,
    /// Sway cycles per raster height (rounded). Default: 3.0
    pub wave_frequency: f64,
    /// Sway amplitude, in raster widths. Default: 0.02
    pub wave_amplitude: f64,
    /// Flute layout. Default: linear
    pub pattern_type: PatternType,
    /// Kaleidoscope wedge count. Default: 8
    pub segment_count: i32,
    /// Flute cross-section. Default: round
    pub ridge_profile: RidgeProfile,
    /// Bow toward the middle row, in flutes. Default: 0.0
    pub curvature: f64,
    /// Domain warp amount. Default: 0.0
    pub fluidity: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            density: 12.0,
            wave_frequency: 3.0,
            wave_amplitude: 0.02,
            pattern_type: PatternType::Linear,
            segment_count: 8,
            ridge_profile: RidgeProfile::Round,
            curvature: 0.0,
            fluidity: 0.0,
        }
    }
}

/// Replace a non-finite value with `fallback`.
#[inline]
fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

impl ParameterSet {
    /// Generate randomized parameters.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self {
            density: rng.random_range(4.0..40.0_f64).round(),
            wave_frequency: rng.random_range(0.0..6.0_f64).round(),
            wave_amplitude: rng.random_range(0.0..0.05),
            pattern_type: PATTERNS[rng.random_range(0..PATTERNS.len())],
            segment_count: rng.random_range(3..16),
            ridge_profile: PROFILES[rng.random_range(0..PROFILES.len())],
            curvature: rng.random_range(-0.5..0.5),
            fluidity: if rng.random_bool(0.3) {
                rng.random_range(0.0..1.0)
            } else {
                0.0
            },
        }
    }

    /// Copy with every field clamped into its valid range.
    ///
    /// - `density <= 0` or non-finite becomes [`MIN_DENSITY`]
    /// - `segment_count < 2` becomes [`MIN_SEGMENTS`]
    /// - `fluidity < 0` or non-finite becomes 0
    /// - other non-finite floats become 0
    pub fn sanitized(&self) -> Self {
        let mut p = self.clone();

        if !(p.density > 0.0) || !p.density.is_finite() {
            tracing::debug!(density = p.density, "clamping density to {}", MIN_DENSITY);
            p.density = MIN_DENSITY;
        }
        if p.segment_count < MIN_SEGMENTS {
            tracing::debug!(segments = p.segment_count, "clamping segment count to {}", MIN_SEGMENTS);
            p.segment_count = MIN_SEGMENTS;
        }
        if !(p.fluidity >= 0.0) || !p.fluidity.is_finite() {
            tracing::debug!(fluidity = p.fluidity, "clamping fluidity to 0");
            p.fluidity = 0.0;
        }
        p.wave_frequency = finite_or(p.wave_frequency, 0.0);
        p.wave_amplitude = finite_or(p.wave_amplitude, 0.0);
        p.curvature = finite_or(p.curvature, 0.0);

        p
    }

    /// Set a parameter from its string form.
    ///
    /// Names accept both `snake_case` and the `camelCase` used in JSON.
    /// Enum values never fail to parse; unknown names fall back.
    pub fn set_param(&mut self, name: &str, value: &str) -> Result<(), String> {
        let parse_f64 = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|e| format!("Invalid value '{}': {}", v, e))
        };
        let parse_i32 = |v: &str| {
            v.trim()
                .parse::<i32>()
                .map_err(|e| format!("Invalid value '{}': {}", v, e))
        };
        match name {
            "density" => self.density = parse_f64(value)?,
            "wave_frequency" | "waveFrequency" => self.wave_frequency = parse_f64(value)?,
            "wave_amplitude" | "waveAmplitude" => self.wave_amplitude = parse_f64(value)?,
            "pattern_type" | "patternType" | "pattern" => {
                self.pattern_type = PatternType::by_name_or_default(value)
            }
            "segment_count" | "segmentCount" | "segments" => {
                self.segment_count = parse_i32(value)?
            }
            "ridge_profile" | "ridgeProfile" | "profile" => {
                self.ridge_profile = RidgeProfile::by_name_or_default(value)
            }
            "curvature" => self.curvature = parse_f64(value)?,
            "fluidity" => self.fluidity = parse_f64(value)?,
            _ => {
                return Err(format!(
                    "Unknown param '{}'. Available: density, wave_frequency, wave_amplitude, pattern_type, segment_count, ridge_profile, curvature, fluidity",
                    name
                ));
            }
        }
        Ok(())
    }

    /// Current values as `(name, value)` pairs.
    pub fn list_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("density", format!("{:.2}", self.density)),
            ("wave_frequency", format!("{:.1}", self.wave_frequency)),
            ("wave_amplitude", format!("{:.3}", self.wave_amplitude)),
            ("pattern_type", self.pattern_type.to_string()),
            ("segment_count", self.segment_count.to_string()),
            ("ridge_profile", self.ridge_profile.to_string()),
            ("curvature", format!("{:.2}", self.curvature)),
            ("fluidity", format!("{:.2}", self.fluidity)),
        ]
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} density={:.1} wave={:.0}x{:.3} curve={:.2} fluid={:.2}",
            self.pattern_type,
            self.ridge_profile,
            self.density,
            self.wave_frequency,
            self.wave_amplitude,
            self.curvature,
            self.fluidity
        )?;
        if self.pattern_type == PatternType::Kaleidoscope {
            write!(f, " segments={}", self.segment_count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sanitize_density() {
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let p = ParameterSet {
                density: bad,
                ..ParameterSet::default()
            };
            assert_eq!(p.sanitized().density, MIN_DENSITY);
        }
    }

    #[test]
    fn test_sanitize_segments_and_fluidity() {
        let p = ParameterSet {
            segment_count: -4,
            fluidity: -0.5,
            curvature: f64::NAN,
            ..ParameterSet::default()
        }
        .sanitized();
        assert_eq!(p.segment_count, MIN_SEGMENTS);
        assert_eq!(p.fluidity, 0.0);
        assert_eq!(p.curvature, 0.0);
    }

    #[test]
    fn test_sanitize_keeps_valid_values() {
        let p = ParameterSet {
            density: 7.5,
            segment_count: 5,
            fluidity: 0.25,
            ..ParameterSet::default()
        };
        assert_eq!(p.sanitized(), p);
    }

    #[test]
    fn test_set_param() {
        let mut p = ParameterSet::default();
        p.set_param("density", "20").unwrap();
        p.set_param("patternType", "hexagon").unwrap();
        p.set_param("ridge_profile", "SAWTOOTH").unwrap();
        p.set_param("segments", "3").unwrap();
        assert_eq!(p.density, 20.0);
        assert_eq!(p.pattern_type, PatternType::Hexagon);
        assert_eq!(p.ridge_profile, RidgeProfile::Sawtooth);
        assert_eq!(p.segment_count, 3);

        p.set_param("pattern", "nope").unwrap();
        assert_eq!(p.pattern_type, PatternType::Linear);

        assert!(p.set_param("density", "thick").is_err());
        assert!(p.set_param("gloss", "1").is_err());
    }

    #[test]
    fn test_json_defaults_and_fallbacks() {
        let p: ParameterSet = serde_json::from_str(
            r#"{"density": 4, "patternType": "hexagon", "ridgeProfile": "ogee"}"#,
        )
        .unwrap();
        assert_eq!(
            p,
            ParameterSet {
                density: 4.0,
                pattern_type: PatternType::Hexagon,
                ridge_profile: RidgeProfile::Round,
                ..ParameterSet::default()
            }
        );
    }

    #[test]
    fn test_json_roundtrip_names() {
        let json = serde_json::to_value(ParameterSet::default()).unwrap();
        assert_eq!(json["patternType"], "linear");
        assert_eq!(json["ridgeProfile"], "round");
        assert_eq!(json["segmentCount"], 8);
    }

    #[test]
    fn test_random_is_valid() {
        for _ in 0..20 {
            let p = ParameterSet::random();
            assert_eq!(p.sanitized(), p);
        }
    }

    #[test]
    fn test_list_params() {
        let names: Vec<&str> = ParameterSet::default()
            .list_params()
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(names.len(), 8);
        assert!(names.contains(&"ridge_profile"));
    }
}
