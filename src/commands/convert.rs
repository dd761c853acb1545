use hsl_color::{hsl_to_rgb, rgb_to_hsl, Hsl, Strictness};

use crate::error::CliError;
use crate::input::parse_rgb;
use crate::report::{HslReport, RgbReport};

/// Convert a color argument to HSL.
///
/// With `strict`, channels outside 0.0..=1.0 (beyond the tolerance) are
/// rejected instead of being converted as-is.
pub fn run_to_hsl(
    color: &str,
    degrees: bool,
    strict: Option<Strictness>,
) -> Result<HslReport, CliError> {
    let rgb = parse_rgb(color)?;
    let hsl = match strict {
        Some(strict) => strict.try_rgb_to_hsl(rgb)?,
        None => rgb_to_hsl(rgb.r, rgb.g, rgb.b),
    };
    tracing::debug!(r = rgb.r, g = rgb.g, b = rgb.b, h = hsl.h, s = hsl.s, l = hsl.l, "to-hsl");
    Ok(HslReport::new(rgb, hsl, degrees))
}

/// Convert HSL components to RGB. With `degrees`, hue is in degrees and
/// saturation/lightness in percent.
pub fn run_to_rgb(
    h: f64,
    s: f64,
    l: f64,
    degrees: bool,
    strict: Option<Strictness>,
) -> Result<RgbReport, CliError> {
    let hsl = if degrees {
        Hsl::from_degrees(h, s, l)
    } else {
        Hsl::new(h, s, l)
    };
    let rgb = match strict {
        Some(strict) => strict.try_hsl_to_rgb(hsl)?,
        None => hsl_to_rgb(hsl.h, hsl.s, hsl.l),
    };
    tracing::debug!(h = hsl.h, s = hsl.s, l = hsl.l, r = rgb.r, g = rgb.g, b = rgb.b, "to-rgb");
    Ok(RgbReport::from(rgb))
}
