//! Periodic wave functions of a cyclic phase.
//!
//! Every function here takes a phase `t` measured in cycles (period 1) and
//! returns a value in [-1, 1].

use std::f64::consts::TAU;

/// Cosine wave, `cos(2πt)`.
#[inline]
pub fn wave_cos(t: f64) -> f64 {
    (t * TAU).cos()
}

/// Cosine wave at `harmonic` times the base frequency.
#[inline]
pub fn wave_cos_harmonic(t: f64, harmonic: f64) -> f64 {
    (t * TAU * harmonic).cos()
}

/// Triangle wave, +1 at whole cycles and -1 at half cycles.
///
/// Shares its sign with [`wave_cos`] everywhere.
#[inline]
pub fn wave_triangle(t: f64) -> f64 {
    -(2.0 * (2.0 * (t - t.round())).abs() - 1.0)
}

/// Sawtooth wave, ramping from -1 to +1 and resetting each cycle.
#[inline]
pub fn wave_sawtooth(t: f64) -> f64 {
    2.0 * (t - t.floor()) - 1.0
}

/// Square wave of height `level`, positive where the cosine is positive.
#[inline]
pub fn wave_square(t: f64, level: f64) -> f64 {
    if wave_cos(t) > 0.0 { level } else { -level }
}

/// Trapezoid wave: zero where `|triangle| < dead_zone`, ramping linearly
/// to ±1 over the remainder.
#[inline]
pub fn wave_trapezoid(t: f64, dead_zone: f64) -> f64 {
    let tri = wave_triangle(t);
    let ramp = ((tri.abs() - dead_zone) / (1.0 - dead_zone)).max(0.0);
    ramp.copysign(tri)
}
