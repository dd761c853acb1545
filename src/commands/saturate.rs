use hsl_color::{saturate, ColorError, Strictness};

use crate::error::CliError;
use crate::input::parse_rgb;
use crate::report::{RgbReport, SaturateReport};

/// Shift the HSL saturation of a color argument by `shift` (-1.0..=1.0).
pub fn run_saturate(
    color: &str,
    shift: f64,
    strict: Option<Strictness>,
) -> Result<SaturateReport, CliError> {
    if !shift.is_finite() || !(-1.0..=1.0).contains(&shift) {
        return Err(ColorError::InvalidArgument {
            channel: "shift",
            value: shift,
        }
        .into());
    }

    let rgb = parse_rgb(color)?;
    let rgb = match strict {
        Some(strict) => strict.check_rgb(rgb)?,
        None => rgb,
    };
    let out = saturate(rgb, shift);
    tracing::debug!(input = %rgb.to_hex(), output = %out.to_hex(), shift, "saturate");

    Ok(SaturateReport {
        input: rgb.to_hex(),
        shift,
        output: RgbReport::from(out),
    })
}
