//! HSL color type
//!
//! All three components are normalized to 0.0..=1.0. Scaling to degrees and
//! percent is left to the caller, with [`Hsl::from_degrees`] and
//! [`Hsl::to_degrees`] as opt-in helpers.

use super::rgb::Rgb;
use crate::convert::rgb_to_hsl;

/// A color in the HSL (hue, saturation, lightness) model.
///
/// # Components
///
/// - `h`: Hue as a fraction of the full circle (multiply by 360 for degrees)
/// - `s`: Saturation (multiply by 100 for percent)
/// - `l`: Lightness (multiply by 100 for percent)
///
/// For achromatic colors the hue is undefined and stored as exactly 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue: 0.0..1.0
    pub h: f64,
    /// Saturation: 0.0 (gray) to 1.0 (fully saturated)
    pub s: f64,
    /// Lightness: 0.0 (black) to 1.0 (white)
    pub l: f64,
}

impl Hsl {
    /// Create a new Hsl color from normalized components.
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Create an Hsl color from hue in degrees and saturation/lightness in percent.
    ///
    /// # Example
    /// ```
    /// use hsl_color::Hsl;
    /// let teal = Hsl::from_degrees(180.0, 100.0, 25.0);
    /// assert_eq!(teal, Hsl::new(0.5, 1.0, 0.25));
    /// ```
    #[inline]
    pub fn from_degrees(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: h / 360.0,
            s: s / 100.0,
            l: l / 100.0,
        }
    }

    /// Return `(degrees, saturation %, lightness %)`.
    #[inline]
    pub fn to_degrees(self) -> (f64, f64, f64) {
        (self.h * 360.0, self.s * 100.0, self.l * 100.0)
    }

    /// True when saturation is exactly zero.
    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.s == 0.0
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb.r, rgb.g, rgb.b)
    }
}
