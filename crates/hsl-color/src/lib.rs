//! hsl-color: exact RGB <-> HSL conversion
//!
//! This library converts colors between the RGB and HSL models on
//! normalized `f64` channels. It is meant to be called once per pixel from
//! an image-processing loop, so every conversion is a pure function that
//! returns a small `Copy` value: no allocation, no shared state, safe to
//! call from any number of threads.
//!
//! # Quick Start
//!
//! ```
//! use hsl_color::{hsl_to_rgb, rgb_to_hsl};
//!
//! let hsl = rgb_to_hsl(25.0 / 255.0, 60.0 / 255.0, 128.0 / 255.0);
//! let rgb = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
//!
//! assert_eq!(rgb.to_bytes(), [25, 60, 128]);
//! ```
//!
//! # Units
//!
//! Inputs and outputs are normalized to 0.0..=1.0. Hue is a fraction of the
//! full circle; multiply by 360 for degrees. Saturation and lightness are
//! fractions; multiply by 100 for percent. [`Hsl::from_degrees`] and
//! [`Hsl::to_degrees`] do this scaling for callers that want it.
//!
//! # Exactness
//!
//! The conversions use exact floating point comparisons everywhere a
//! branch is chosen. As a result every one of the 16,777,216 8-bit RGB
//! triples comes back unchanged after RGB -> HSL -> RGB and rounding, which
//! [`round_trip_sweep`] verifies.
//!
//! # Validation
//!
//! The conversions accept any input and never fail. Out-of-range channels
//! simply flow through the formulas. Use [`Strictness`] to reject them
//! first.
//!
//! # Saturation
//!
//! [`saturate`], [`saturate_pixel`] and [`saturate_buffer`] shift the HSL
//! saturation of colors, single pixels or whole interleaved RGB/RGBA
//! buffers, optionally weighted by a mask.

pub mod color;
pub mod convert;
pub mod error;
pub mod saturation;
pub mod strict;
pub mod sweep;


pub use color::{Hsl, Rgb};
pub use convert::{hsl_to_rgb, hue_to_rgb, min_max, rgb_to_hsl};
pub use error::{ColorError, ParseColorError};
pub use saturation::mask::{mask_from_alpha, mask_from_luma, mask_from_threshold};
pub use saturation::{saturate, saturate_buffer, saturate_pixel, PixelLayout};
pub use strict::Strictness;
pub use sweep::{round_trip_bytes, round_trip_sweep, Mismatch, SweepReport, RGB_CUBE_SIZE};
