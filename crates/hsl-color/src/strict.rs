//! Opt-in input validation.
//!
//! The plain conversions accept anything. [`Strictness`] lets a caller
//! reject channels that are not finite or fall outside 0.0..=1.0 by more
//! than a tolerance before converting.
//!
//! ```
//! use hsl_color::{ColorError, Rgb, Strictness};
//!
//! let strict = Strictness::new().tolerance(1e-9);
//! assert!(strict.try_rgb_to_hsl(Rgb::new(0.2, 0.4, 0.6)).is_ok());
//! assert!(matches!(
//!     strict.try_rgb_to_hsl(Rgb::new(0.2, 1.5, 0.6)),
//!     Err(ColorError::InvalidArgument { channel: "g", .. })
//! ));
//! ```

use crate::color::{Hsl, Rgb};
use crate::convert::{hsl_to_rgb, rgb_to_hsl};
use crate::error::ColorError;

/// Range check applied before conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strictness {
    /// How far outside 0.0..=1.0 a channel may stray before it is rejected.
    pub tolerance: f64,
}

impl Default for Strictness {
    fn default() -> Self {
        Self { tolerance: 0.0 }
    }
}

impl Strictness {
    /// Create a check with zero tolerance.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tolerance. Negative or non-finite values are treated as 0.0.
    #[inline]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = if tolerance.is_finite() {
            tolerance.max(0.0)
        } else {
            0.0
        };
        self
    }

    /// Check a single named value.
    pub fn check(&self, channel: &'static str, value: f64) -> Result<f64, ColorError> {
        let lo = -self.tolerance;
        let hi = 1.0 + self.tolerance;
        if value.is_finite() && value >= lo && value <= hi {
            Ok(value)
        } else {
            Err(ColorError::InvalidArgument { channel, value })
        }
    }

    /// Check every channel of an RGB color.
    pub fn check_rgb(&self, rgb: Rgb) -> Result<Rgb, ColorError> {
        self.check("r", rgb.r)?;
        self.check("g", rgb.g)?;
        self.check("b", rgb.b)?;
        Ok(rgb)
    }

    /// Check every component of an HSL color.
    pub fn check_hsl(&self, hsl: Hsl) -> Result<Hsl, ColorError> {
        self.check("h", hsl.h)?;
        self.check("s", hsl.s)?;
        self.check("l", hsl.l)?;
        Ok(hsl)
    }

    /// Validate, then convert RGB to HSL.
    pub fn try_rgb_to_hsl(&self, rgb: Rgb) -> Result<Hsl, ColorError> {
        let rgb = self.check_rgb(rgb)?;
        Ok(rgb_to_hsl(rgb.r, rgb.g, rgb.b))
    }

    /// Validate, then convert HSL to RGB.
    pub fn try_hsl_to_rgb(&self, hsl: Hsl) -> Result<Rgb, ColorError> {
        let hsl = self.check_hsl(hsl)?;
        Ok(hsl_to_rgb(hsl.h, hsl.s, hsl.l))
    }
}
