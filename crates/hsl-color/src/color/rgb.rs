//! RGB color type
//!
//! Channels are normalized doubles. No gamma handling happens here: the
//! values are whatever the surrounding pipeline stores per pixel.

use std::str::FromStr;

use super::hsl::Hsl;
use crate::convert::hsl_to_rgb;
use crate::error::ParseColorError;

/// A color in the RGB model.
///
/// Values are conventionally in the range 0.0..=1.0 (mapping to 0..255 for
/// 8-bit). Nothing is clamped: out-of-range values pass through the
/// conversions unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel (0.0..=1.0)
    pub r: f64,
    /// Green channel (0.0..=1.0)
    pub g: f64,
    /// Blue channel (0.0..=1.0)
    pub b: f64,
}

impl Rgb {
    /// Create a new Rgb color from float values.
    ///
    /// # Arguments
    /// * `r` - Red channel (0.0..=1.0)
    /// * `g` - Green channel (0.0..=1.0)
    /// * `b` - Blue channel (0.0..=1.0)
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Rgb color from 8-bit unsigned integer values.
    ///
    /// Each channel is divided by 255.0, the same scaling the exhaustive
    /// round-trip check uses.
    ///
    /// # Example
    /// ```
    /// use hsl_color::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Create an Rgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    ///
    /// # Example
    /// ```
    /// use hsl_color::Rgb;
    /// let color = Rgb::new(1.0, 0.5, 0.0);
    /// assert_eq!(color.to_bytes(), [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Format as a lowercase `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl.h, hsl.s, hsl.l)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Read `#rrggbb` or the short `#rgb` form; the `#` is optional.
    ///
    /// Digits may be upper or lower case, and surrounding whitespace is
    /// ignored. In the short form each digit is doubled (`#f80` is `#ff8800`).
    ///
    /// ```
    /// use hsl_color::Rgb;
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(1.0, 0.0, 0.0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        let mut value: u32 = 0;
        let mut count = 0;
        for c in digits.chars() {
            let d = c.to_digit(16).ok_or(ParseColorError::NotHex { found: c })?;
            value = (value << 4) | d;
            count += 1;
            if count > 6 {
                break;
            }
        }

        match count {
            3 => {
                let nibble = |shift: u32| ((value >> shift) & 0xf) as u8 * 0x11;
                Ok(Self::from_u8(nibble(8), nibble(4), nibble(0)))
            }
            6 => {
                let byte = |shift: u32| ((value >> shift) & 0xff) as u8;
                Ok(Self::from_u8(byte(16), byte(8), byte(0)))
            }
            _ => Err(ParseColorError::WrongLength {
                digits: digits.chars().count(),
            }),
        }
    }
}
