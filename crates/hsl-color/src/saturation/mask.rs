//! Per-pixel weight masks for [`saturate_buffer`](super::saturate_buffer).
//!
//! A mask holds one `f32` weight in 0.0..=1.0 per pixel. Masks are usually
//! built from a second image of the same size: its brightness, a hard
//! black/white threshold of it, or its alpha channel.

use super::PixelLayout;
use crate::error::ColorError;

/// Mean of the three color channels of each pixel, scaled to 0.0..=1.0.
///
/// ```
/// use hsl_color::{mask_from_luma, PixelLayout};
///
/// let mask = mask_from_luma(&[255, 255, 255, 0, 0, 0], PixelLayout::Rgb).unwrap();
/// assert_eq!(mask, vec![1.0, 0.0]);
/// ```
pub fn mask_from_luma(pixels: &[u8], layout: PixelLayout) -> Result<Vec<f32>, ColorError> {
    layout.pixel_count(pixels.len())?;
    Ok(pixels
        .chunks_exact(layout.pixel_size())
        .map(|px| channel_mean(px) / 255.0)
        .collect())
}

/// 1.0 where the channel mean is at least `threshold`, else 0.0.
pub fn mask_from_threshold(
    pixels: &[u8],
    layout: PixelLayout,
    threshold: u8,
) -> Result<Vec<f32>, ColorError> {
    layout.pixel_count(pixels.len())?;
    Ok(pixels
        .chunks_exact(layout.pixel_size())
        .map(|px| {
            if channel_mean(px) >= threshold as f32 {
                1.0
            } else {
                0.0
            }
        })
        .collect())
}

/// Alpha channel of an RGBA buffer, scaled to 0.0..=1.0.
pub fn mask_from_alpha(pixels: &[u8]) -> Result<Vec<f32>, ColorError> {
    let layout = PixelLayout::Rgba;
    layout.pixel_count(pixels.len())?;
    Ok(pixels
        .chunks_exact(layout.pixel_size())
        .map(|px| px[3] as f32 / 255.0)
        .collect())
}

#[inline]
fn channel_mean(px: &[u8]) -> f32 {
    (px[0] as u32 + px[1] as u32 + px[2] as u32) as f32 / 3.0
}
