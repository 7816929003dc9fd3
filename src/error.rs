//! # Error Types
//!
//! This module defines error types used throughout the fluted library.
//!
//! Bad parameter values are not errors: they are clamped or replaced by a
//! default (see [`crate::params::ParameterSet::sanitized`]). The synthesizer
//! itself only fails when it cannot allocate the output buffer.

use thiserror::Error;

/// Main error type for fluted operations
#[derive(Debug, Error)]
pub enum FlutedError {
    /// The output buffer for this resolution cannot be allocated
    #[error("Cannot allocate a {resolution}x{resolution} normal map")]
    ResourceExhausted { resolution: u32 },

    /// Parameter file or override could not be read
    #[error("Config error: {0}")]
    Config(String),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
