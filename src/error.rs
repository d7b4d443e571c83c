//! Error types for pitch detection.
//!
//! Not finding a pitch is never an error: detectors report that as `Ok(None)`.
//! Errors are reserved for inputs that would otherwise index out of bounds or
//! push `NaN`/`inf` through the logarithms.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PitchError {
    /// Frame is too short to compare it against itself at any lag
    #[error("Frame too short: {len} samples leaves no lag to correlate (need at least 2)")]
    FrameTooShort { len: usize },

    /// Frame length differs from the size the detector was built for
    #[error("Frame size mismatch: expected {expected} samples, got {got}")]
    FrameSizeMismatch { expected: usize, got: usize },

    #[error("Invalid sample rate: {0} Hz (must be finite and positive)")]
    InvalidSampleRate(f64),

    #[error("Invalid frequency: {0} Hz (must be finite and positive)")]
    InvalidFrequency(f64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PitchError>;
