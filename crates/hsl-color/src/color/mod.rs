//! Color value types
//!
//! Both types are plain `Copy` triples of `f64`. Conversions construct a new
//! value and never touch their input.
//!
//! # Example
//!
//! ```
//! use hsl_color::{Hsl, Rgb};
//!
//! let rgb = Rgb::from_u8(25, 60, 128);
//! let hsl = Hsl::from(rgb);
//! let back = Rgb::from(hsl);
//! assert_eq!(back.to_bytes(), [25, 60, 128]);
//! ```

mod hsl;
mod rgb;

pub use hsl::Hsl;
pub use rgb::Rgb;
