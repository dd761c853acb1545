//! RGB <-> HSL conversion
//!
//! The four functions here are the whole conversion model. They are total
//! over finite doubles: no validation, no clamping, no allocation. Input is
//! expected in 0.0..=1.0 but anything else still produces a defined result.
//!
//! Comparisons are exact throughout. The sector selection in
//! [`rgb_to_hsl`] relies on `cmax == r` holding bit-for-bit after
//! [`min_max`], and the branch boundaries in [`hue_to_rgb`] are strict `<`.
//! Both are needed for every 8-bit RGB triple to survive a round trip.

use crate::color::{Hsl, Rgb};

const ONE_SIXTH: f64 = 1.0 / 6.0;
const ONE_THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Return `(max, min)` of three channel values.
///
/// Ties are broken arbitrarily; equal values are interchangeable. No
/// epsilon is involved, so the returned maximum is always bit-identical to
/// one of the inputs.
///
/// # Example
/// ```
/// use hsl_color::min_max;
/// assert_eq!(min_max(0.2, 0.9, 0.4), (0.9, 0.2));
/// ```
#[inline]
pub fn min_max(r: f64, g: f64, b: f64) -> (f64, f64) {
    let max = if r > g {
        if r > b {
            r
        } else {
            b
        }
    } else if g > b {
        g
    } else {
        b
    };

    let min = if r < g {
        if r < b {
            r
        } else {
            b
        }
    } else if g < b {
        g
    } else {
        b
    };

    (max, min)
}

/// Convert normalized RGB to normalized HSL.
///
/// The hue sector is chosen by which channel equals the maximum, checked in
/// the order red, green, blue. When two channels tie for the maximum the
/// earlier one wins.
///
/// Achromatic input (all channels equal) yields `h == 0.0` and `s == 0.0`
/// exactly.
///
/// # Example
/// ```
/// use hsl_color::rgb_to_hsl;
///
/// let hsl = rgb_to_hsl(1.0, 0.0, 0.0);
/// assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 1.0, 0.5));
/// ```
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let (cmax, cmin) = min_max(r, g, b);
    let delta = cmax - cmin;
    let l = (cmax + cmin) / 2.0;

    if delta == 0.0 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let h = if cmax == r {
        let mut t = (g - b) / delta;
        if t.abs() > 6.0 && t > 0.0 {
            t %= 6.0;
        } else if t < 0.0 {
            t = 6.0 - t.abs();
        }
        60.0 * t
    } else if cmax == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let s = if l <= 0.5 {
        delta / (cmax + cmin)
    } else {
        delta / (2.0 - cmax - cmin)
    };

    Hsl { h: h / 360.0, s, l }
}

/// Map one phase-shifted hue sample to a channel value.
///
/// `m1` and `m2` are the lower and upper interpolation anchors. `h` may lie
/// outside 0.0..1.0 (callers pass `h + 1/3` and `h - 1/3`); it is wrapped
/// back into range first. The result follows the piecewise-linear ramp:
///
/// | normalized `h`      | result                          |
/// |---------------------|---------------------------------|
/// | `h < 1/6`           | `m1 + (m2 - m1) * h * 6`        |
/// | `1/6 <= h < 1/2`    | `m2`                            |
/// | `1/2 <= h < 2/3`    | `m1 + (m2 - m1) * (2/3 - h) * 6`|
/// | `h >= 2/3`          | `m1`                            |
///
/// Values exactly on a boundary belong to the following row.
///
/// # Example
/// ```
/// use hsl_color::hue_to_rgb;
/// assert_eq!(hue_to_rgb(0.0, 1.0, 1.0 / 6.0), 1.0);
/// assert_eq!(hue_to_rgb(0.0, 1.0, 2.0 / 3.0), 0.0);
/// ```
#[inline]
pub fn hue_to_rgb(m1: f64, m2: f64, h: f64) -> f64 {
    let mut h = h;
    if h.abs() > 1.0 && h > 0.0 {
        h %= 1.0;
    } else if h < 0.0 {
        h = 1.0 - h.abs();
    }

    if h < ONE_SIXTH {
        return m1 + (m2 - m1) * h * 6.0;
    }
    if h < 0.5 {
        return m2;
    }
    if h < TWO_THIRDS {
        return m1 + (m2 - m1) * (TWO_THIRDS - h) * 6.0;
    }
    m1
}

/// Convert normalized HSL to normalized RGB.
///
/// Zero saturation short-circuits to `(l, l, l)` regardless of hue.
///
/// # Example
/// ```
/// use hsl_color::{hsl_to_rgb, Rgb};
///
/// assert_eq!(hsl_to_rgb(0.7, 0.0, 0.25), Rgb::new(0.25, 0.25, 0.25));
/// assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb::new(1.0, 0.0, 0.0));
/// ```
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    if s == 0.0 {
        return Rgb { r: l, g: l, b: l };
    }

    let m2 = if l <= 0.5 {
        l * (1.0 + s)
    } else {
        l + s - (l * s)
    };
    let m1 = 2.0 * l - m2;

    Rgb {
        r: hue_to_rgb(m1, m2, h + ONE_THIRD),
        g: hue_to_rgb(m1, m2, h),
        b: hue_to_rgb(m1, m2, h - ONE_THIRD),
    }
}
