//! Error definitions for the checked parts of the API.
//!
//! Pixel kernels themselves never fail; only parameter construction and plane-level helpers validate their input.
use thiserror::Error;

/// A list of possible parameter errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DSPError {
    /// Block width is not one of 4, 8 or 16.
    #[error("invalid block size {0}")]
    InvalidBlockSize(usize),
    /// Bitstream version/profile is outside `0..=3`.
    #[error("invalid profile {0}")]
    InvalidProfile(u8),
    /// Loop filter level is above 63.
    #[error("invalid loop filter level {0}")]
    InvalidFilterLevel(u8),
    /// Loop filter sharpness is above 7.
    #[error("invalid loop filter sharpness {0}")]
    InvalidSharpness(u8),
    /// Plane buffer cannot hold the declared geometry.
    #[error("plane buffer too small: {need} bytes needed, {have} provided")]
    BufferTooSmall {
        /// Minimum buffer length for the declared geometry.
        need: usize,
        /// Actual buffer length.
        have: usize,
    },
}

/// A specialised `Result` type for parameter validation.
pub type DSPResult<T> = Result<T, DSPError>;
