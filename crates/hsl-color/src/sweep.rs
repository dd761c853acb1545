//! Exhaustive 8-bit round-trip check.
//!
//! Every `(r, g, b)` in 0..=255 is scaled by 1/255, converted to HSL and
//! back, rounded to the nearest byte and compared with the input. A correct
//! conversion reproduces all 16,777,216 triples.

use crate::color::{Hsl, Rgb};
use crate::convert::{hsl_to_rgb, rgb_to_hsl};

/// Number of distinct 8-bit RGB triples.
pub const RGB_CUBE_SIZE: u64 = 256 * 256 * 256;

/// A triple that did not survive the round trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    /// Original 8-bit input
    pub input: [u8; 3],
    /// Intermediate HSL value
    pub hsl: Hsl,
    /// Bytes produced by the way back
    pub output: [u8; 3],
}

/// Outcome of [`round_trip_sweep`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SweepReport {
    /// Number of triples converted
    pub checked: u64,
    /// Number of triples that came back different
    pub mismatches: u64,
    /// The first mismatch in r-major order, if any
    pub first_mismatch: Option<Mismatch>,
}

impl SweepReport {
    /// True when every checked triple round-tripped.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.mismatches == 0
    }
}

/// Round-trip a single 8-bit triple, returning the bytes that come back.
#[inline]
pub fn round_trip_bytes(input: [u8; 3]) -> ([u8; 3], Hsl) {
    let rgb = Rgb::from_bytes(input);
    let hsl = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
    let back = hsl_to_rgb(hsl.h, hsl.s, hsl.l);
    (back.to_bytes(), hsl)
}

/// Run the round trip over the whole 256x256x256 cube.
pub fn round_trip_sweep() -> SweepReport {
    let mut report = SweepReport::default();

    for r in 0..=255u8 {
        for g in 0..=255u8 {
            for b in 0..=255u8 {
                let input = [r, g, b];
                let (output, hsl) = round_trip_bytes(input);
                report.checked += 1;
                if output != input {
                    report.mismatches += 1;
                    report.first_mismatch.get_or_insert(Mismatch { input, hsl, output });
                }
            }
        }
    }

    report
}
