//! Parsing of color arguments given on the command line.

use hsl_color::Rgb;

use crate::error::CliError;

/// Parse an RGB color given as hex (`#1a3c80`, `f00`) or as three
/// comma-separated normalized floats (`0.1,0.25,0.5`).
pub fn parse_rgb(input: &str) -> Result<Rgb, CliError> {
    if input.contains(',') {
        let [r, g, b] = parse_triple(input)?;
        return Ok(Rgb::new(r, g, b));
    }
    Ok(input.parse::<Rgb>()?)
}

/// Parse exactly three comma-separated floats.
pub fn parse_triple(input: &str) -> Result<[f64; 3], CliError> {
    let invalid = |reason: String| CliError::InvalidColor {
        input: input.to_string(),
        reason,
    };

    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(invalid(format!("expected 3 components, got {}", parts.len())));
    }

    let mut values = [0.0; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| invalid(format!("'{part}': {e}")))?;
    }
    Ok(values)
}
