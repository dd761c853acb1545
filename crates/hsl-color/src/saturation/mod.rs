//! Saturation shift built on the HSL round trip.
//!
//! A shift in -1.0..=1.0 is added to the HSL saturation of each pixel and
//! the result is clamped to 0.0..=1.0 before converting back. Hue and
//! lightness are carried through untouched, so `shift = -1.0` produces a
//! grayscale pixel of the same lightness.
//!
//! Pixels that are already achromatic are left alone: their hue is the
//! placeholder 0.0 (red), and raising their saturation would tint every
//! gray in the image red.
//!
//! # Buffers
//!
//! [`saturate_buffer`] works in place on interleaved 8-bit RGB or RGBA data
//! and takes an optional per-pixel weight mask (see [`mask`]).
//!
//! ```
//! use hsl_color::{saturate_buffer, PixelLayout};
//!
//! let mut pixels = vec![200, 100, 100, 255, 10, 20, 30, 128];
//! saturate_buffer(&mut pixels, PixelLayout::Rgba, -1.0, None).unwrap();
//!
//! // Fully desaturated, alpha untouched
//! assert_eq!(&pixels[0..4], &[150, 150, 150, 255]);
//! assert_eq!(pixels[7], 128);
//! ```

pub mod mask;

use crate::color::{Hsl, Rgb};
use crate::convert::{hsl_to_rgb, rgb_to_hsl};
use crate::error::ColorError;

/// Interleaved 8-bit pixel layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// 3 bytes per pixel: R, G, B
    Rgb,
    /// 4 bytes per pixel: R, G, B, A (alpha is never modified)
    Rgba,
}

impl PixelLayout {
    /// Bytes per pixel.
    #[inline]
    pub fn pixel_size(self) -> usize {
        match self {
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }

    /// Number of whole pixels in a buffer, or an error if there is a remainder.
    pub fn pixel_count(self, len: usize) -> Result<usize, ColorError> {
        let pixel_size = self.pixel_size();
        if len % pixel_size != 0 {
            return Err(ColorError::BufferLength { len, pixel_size });
        }
        Ok(len / pixel_size)
    }
}

/// Shift the HSL saturation of a single color.
///
/// The shift is not validated here; the result saturation is always
/// clamped to 0.0..=1.0.
///
/// # Example
/// ```
/// use hsl_color::{saturate, Rgb};
///
/// let gray = saturate(Rgb::from_u8(200, 100, 100), -1.0);
/// assert_eq!(gray.to_bytes(), [150, 150, 150]);
/// ```
pub fn saturate(rgb: Rgb, shift: f64) -> Rgb {
    let hsl = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
    if hsl.is_achromatic() {
        return rgb;
    }
    let shifted = Hsl {
        s: (hsl.s + shift).clamp(0.0, 1.0),
        ..hsl
    };
    hsl_to_rgb(shifted.h, shifted.s, shifted.l)
}

/// Shift the saturation of one 8-bit pixel.
#[inline]
pub fn saturate_pixel(pixel: [u8; 3], shift: f64) -> [u8; 3] {
    saturate(Rgb::from_bytes(pixel), shift).to_bytes()
}

/// Shift the saturation of every pixel in an interleaved buffer, in place.
///
/// With a mask, each pixel's shift is scaled by its weight (clamped to
/// 0.0..=1.0); pixels with weight 0.0 are skipped.
///
/// # Errors
///
/// - [`ColorError::InvalidArgument`] if `shift` is not finite or outside -1.0..=1.0
/// - [`ColorError::BufferLength`] if the buffer holds a partial pixel
/// - [`ColorError::MaskLength`] if the mask does not have one weight per pixel
/// - [`ColorError::InvalidArgument`] if a mask weight is not finite
///
/// The buffer is not touched when an error is returned.
pub fn saturate_buffer(
    pixels: &mut [u8],
    layout: PixelLayout,
    shift: f64,
    mask: Option<&[f32]>,
) -> Result<(), ColorError> {
    if !shift.is_finite() || !(-1.0..=1.0).contains(&shift) {
        return Err(ColorError::InvalidArgument {
            channel: "shift",
            value: shift,
        });
    }

    let count = layout.pixel_count(pixels.len())?;
    if let Some(mask) = mask {
        if mask.len() != count {
            return Err(ColorError::MaskLength {
                expected: count,
                actual: mask.len(),
            });
        }
        if let Some(&weight) = mask.iter().find(|w| !w.is_finite()) {
            return Err(ColorError::InvalidArgument {
                channel: "mask",
                value: weight as f64,
            });
        }
    }

    if shift == 0.0 {
        return Ok(());
    }

    for (i, px) in pixels.chunks_exact_mut(layout.pixel_size()).enumerate() {
        let weight = match mask {
            Some(mask) => (mask[i] as f64).clamp(0.0, 1.0),
            None => 1.0,
        };
        if weight == 0.0 {
            continue;
        }

        let [r, g, b] = saturate_pixel([px[0], px[1], px[2]], shift * weight);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_desaturation_keeps_lightness() {
        let rgb = Rgb::from_u8(25, 60, 128);
        let gray = saturate(rgb, -1.0);
        let l = rgb_to_hsl(rgb.r, rgb.g, rgb.b).l;
        assert_eq!(gray, Rgb::new(l, l, l));
    }

    #[test]
    fn test_saturation_is_clamped() {
        let rgb = Rgb::from_u8(25, 60, 128);
        let boosted = saturate(rgb, 1.0);
        let hsl = rgb_to_hsl(boosted.r, boosted.g, boosted.b);
        assert!((hsl.s - 1.0).abs() < 1e-12, "saturation {}", hsl.s);

        // Beyond the clamp nothing changes
        assert_eq!(saturate(rgb, 1.0), saturate(rgb, 5.0));
    }

    #[test]
    fn test_zero_shift_round_trips_bytes() {
        for px in [[0, 0, 0], [255, 255, 255], [25, 60, 128], [250, 3, 77]] {
            assert_eq!(saturate_pixel(px, 0.0), px);
        }
    }

    #[test]
    fn test_gray_pixels_are_untouched() {
        assert_eq!(saturate_pixel([90, 90, 90], 0.8), [90, 90, 90]);
    }

    #[test]
    fn test_boost_increases_spread() {
        let [r, g, b] = saturate_pixel([150, 110, 100], 0.3);
        assert!(r > 150);
        assert!(b < 100);
        assert!(g < r && g > b);
    }

    #[test]
    fn test_buffer_rgb_layout() {
        let mut pixels = vec![200, 100, 100, 25, 60, 128];
        let expected = [
            saturate_pixel([200, 100, 100], -0.5),
            saturate_pixel([25, 60, 128], -0.5),
        ];
        saturate_buffer(&mut pixels, PixelLayout::Rgb, -0.5, None).unwrap();
        assert_eq!(&pixels[0..3], &expected[0]);
        assert_eq!(&pixels[3..6], &expected[1]);
    }

    #[test]
    fn test_buffer_mask_scales_shift() {
        let mut pixels = vec![200, 100, 100, 200, 100, 100, 200, 100, 100];
        let mask = [0.0f32, 0.5, 1.0];
        saturate_buffer(&mut pixels, PixelLayout::Rgb, -1.0, Some(&mask)).unwrap();

        assert_eq!(&pixels[0..3], &[200, 100, 100]);
        assert_eq!(&pixels[3..6], &saturate_pixel([200, 100, 100], -0.5));
        assert_eq!(&pixels[6..9], &[150, 150, 150]);
    }

    #[test]
    fn test_buffer_errors_leave_data_alone() {
        let mut pixels = vec![200, 100, 100, 7];
        assert_eq!(
            saturate_buffer(&mut pixels, PixelLayout::Rgb, 0.5, None),
            Err(ColorError::BufferLength {
                len: 4,
                pixel_size: 3
            })
        );
        assert_eq!(pixels, vec![200, 100, 100, 7]);

        assert_eq!(
            saturate_buffer(&mut pixels, PixelLayout::Rgba, 0.5, Some(&[1.0, 1.0])),
            Err(ColorError::MaskLength {
                expected: 1,
                actual: 2
            })
        );

        assert!(matches!(
            saturate_buffer(&mut pixels, PixelLayout::Rgba, 1.5, None),
            Err(ColorError::InvalidArgument {
                channel: "shift",
                ..
            })
        ));
        assert!(saturate_buffer(&mut pixels, PixelLayout::Rgba, f64::NAN, None).is_err());
        assert_eq!(pixels, vec![200, 100, 100, 7]);
    }

    #[test]
    fn test_buffer_rejects_non_finite_weights() {
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let mut pixels = vec![200, 100, 100, 25, 60, 128];
            let mask = [1.0, bad];
            let result = saturate_buffer(&mut pixels, PixelLayout::Rgb, 0.5, Some(&mask));
            assert!(
                matches!(
                    result,
                    Err(ColorError::InvalidArgument {
                        channel: "mask",
                        ..
                    })
                ),
                "weight {bad} gave {result:?}"
            );
            assert_eq!(pixels, vec![200, 100, 100, 25, 60, 128]);
        }
    }

    #[test]
    fn test_buffer_clamps_out_of_range_weights() {
        let mut pixels = vec![200, 100, 100, 200, 100, 100];
        let mask = [-0.5f32, 2.0];
        saturate_buffer(&mut pixels, PixelLayout::Rgb, -1.0, Some(&mask)).unwrap();

        // Negative weight clamps to 0.0 (skipped), above 1.0 clamps to 1.0
        assert_eq!(&pixels[0..3], &[200, 100, 100]);
        assert_eq!(&pixels[3..6], &[150, 150, 150]);
    }

    #[test]
    fn test_empty_buffer_is_ok() {
        let mut pixels: Vec<u8> = Vec::new();
        assert!(saturate_buffer(&mut pixels, PixelLayout::Rgb, 0.5, Some(&[])).is_ok());
    }
}
