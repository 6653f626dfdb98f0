//! Error types for frame encoding and effect setup.

use core::fmt;

/// Errors rejected at the buffer boundary, before any output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// A buffer length does not match the declared dimensions or bit depth.
    SizeMismatch {
        /// Length required by the geometry and format
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },
    /// A parameter is outside its valid range.
    InvalidParameter(&'static str),
    /// Panel dimensions cannot be split into two scanned halves.
    InvalidGeometry { width: u16, height: u16 },
}

impl FrameError {
    /// Check a buffer length, returning [`FrameError::SizeMismatch`] on mismatch
    pub const fn check_len(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::SizeMismatch { expected, actual })
        }
    }
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::SizeMismatch { expected, actual } => {
                write!(f, "buffer size mismatch: expected {expected} bytes, got {actual}")
            }
            FrameError::InvalidParameter(name) => write!(f, "invalid parameter: {name}"),
            FrameError::InvalidGeometry { width, height } => {
                write!(f, "invalid panel geometry {width}x{height}: height must be even and non-zero")
            }
        }
    }
}

impl core::error::Error for FrameError {}
