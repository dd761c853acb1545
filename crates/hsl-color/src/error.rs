//! Error types for color parsing, validation and buffer processing
//!
//! The conversions in [`crate::convert`] are total and never fail. These
//! errors only come from the opt-in strictness layer, hex parsing and the
//! in-place buffer operations.

use std::fmt;

/// Why a `#rgb` / `#rrggbb` string could not be read as a color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Digit count after the optional `#` was neither 3 nor 6
    WrongLength {
        /// Number of digits found
        digits: usize,
    },
    /// A character outside `0-9a-fA-F`
    NotHex {
        /// The first offending character
        found: char,
    },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::WrongLength { digits } => {
                write!(f, "hex color needs 3 or 6 digits, got {}", digits)
            }
            ParseColorError::NotHex { found } => {
                write!(f, "{:?} is not a hex digit", found)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for strict validation and buffer operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// A channel or parameter lies outside its accepted range (or is not finite)
    InvalidArgument {
        /// Name of the offending channel or parameter (`"r"`, `"h"`, `"shift"`, ...)
        channel: &'static str,
        /// The rejected value
        value: f64,
    },
    /// Pixel buffer length is not a multiple of the pixel size
    BufferLength {
        /// Length of the buffer in bytes
        len: usize,
        /// Bytes per pixel of the requested layout
        pixel_size: usize,
    },
    /// Mask has a different number of weights than the buffer has pixels
    MaskLength {
        /// Number of pixels in the buffer
        expected: usize,
        /// Number of weights in the mask
        actual: usize,
    },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidArgument { channel, value } => {
                write!(f, "invalid argument: {} = {} is out of range", channel, value)
            }
            ColorError::BufferLength { len, pixel_size } => {
                write!(
                    f,
                    "buffer length {} is not a multiple of the pixel size {}",
                    len, pixel_size
                )
            }
            ColorError::MaskLength { expected, actual } => {
                write!(
                    f,
                    "mask length mismatch: buffer has {} pixels, mask has {} weights",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for ColorError {}
