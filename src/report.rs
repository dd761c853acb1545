//! Command results, printable as text or JSON.

use hsl_color::{Hsl, Rgb, SweepReport};
use serde::Serialize;
use std::fmt;

use crate::config::OutputFormat;
use crate::error::CliError;

/// Render a report in the requested format.
pub fn render<T: Serialize + fmt::Display>(
    report: &T,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HslUnits {
    Normalized,
    Degrees,
}

/// Result of `to-hsl`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HslReport {
    pub input: String,
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub units: HslUnits,
}

impl HslReport {
    pub fn new(rgb: Rgb, hsl: Hsl, degrees: bool) -> Self {
        let (h, s, l, units) = if degrees {
            let (h, s, l) = hsl.to_degrees();
            (h, s, l, HslUnits::Degrees)
        } else {
            (hsl.h, hsl.s, hsl.l, HslUnits::Normalized)
        };
        Self {
            input: describe_input(rgb),
            h,
            s,
            l,
            units,
        }
    }
}

/// Hex for in-gamut input; the hex of anything else would be clamped.
fn describe_input(rgb: Rgb) -> String {
    let in_gamut = [rgb.r, rgb.g, rgb.b]
        .iter()
        .all(|c| (0.0..=1.0).contains(c));
    if in_gamut {
        rgb.to_hex()
    } else {
        format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
    }
}

impl fmt::Display for HslReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.units {
            HslUnits::Degrees => write!(
                f,
                "{} -> hsl({:.2}°, {:.2}%, {:.2}%)",
                self.input, self.h, self.s, self.l
            ),
            HslUnits::Normalized => write!(
                f,
                "{} -> h={:.6} s={:.6} l={:.6}",
                self.input, self.h, self.s, self.l
            ),
        }
    }
}

/// Result of `to-rgb` and `saturate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RgbReport {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub bytes: [u8; 3],
    pub hex: String,
}

impl From<Rgb> for RgbReport {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            bytes: rgb.to_bytes(),
            hex: rgb.to_hex(),
        }
    }
}

impl fmt::Display for RgbReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r8, g8, b8] = self.bytes;
        write!(
            f,
            "{} rgb({}, {}, {}) r={:.6} g={:.6} b={:.6}",
            self.hex, r8, g8, b8, self.r, self.g, self.b
        )
    }
}

/// Result of `saturate`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaturateReport {
    pub input: String,
    pub shift: f64,
    pub output: RgbReport,
}

impl fmt::Display for SaturateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+.2}) -> {}", self.input, self.shift, self.output)
    }
}

/// First failing triple of a `verify` run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MismatchReport {
    pub input: [u8; 3],
    pub output: [u8; 3],
    pub hsl: [f64; 3],
}

/// Result of `verify`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyReport {
    pub checked: u64,
    pub mismatches: u64,
    pub elapsed_ms: f64,
    pub first_mismatch: Option<MismatchReport>,
}

impl VerifyReport {
    pub fn new(sweep: &SweepReport, elapsed_ms: f64) -> Self {
        Self {
            checked: sweep.checked,
            mismatches: sweep.mismatches,
            elapsed_ms,
            first_mismatch: sweep.first_mismatch.map(|m| MismatchReport {
                input: m.input,
                output: m.output,
                hsl: [m.hsl.h, m.hsl.s, m.hsl.l],
            }),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.mismatches == 0
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Checked {} colors in {:.1} ms, {} mismatch(es)",
            self.checked, self.elapsed_ms, self.mismatches
        )?;
        if let Some(m) = &self.first_mismatch {
            write!(
                f,
                "\nFirst mismatch: rgb{:?} came back as rgb{:?} (hsl {:?})",
                m.input, m.output, m.hsl
            )?;
        }
        Ok(())
    }
}

/// Result of `bench`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    pub iterations: u64,
    pub elapsed_ms: f64,
    pub ns_per_conversion: f64,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} conversions in {:.3} ms ({:.2} ns/conversion)",
            self.iterations, self.elapsed_ms, self.ns_per_conversion
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_report_degrees_text() {
        let rgb = Rgb::new(1.0, 0.0, 0.0);
        let report = HslReport::new(rgb, Hsl::new(0.0, 1.0, 0.5), true);
        assert_eq!(report.to_string(), "#ff0000 -> hsl(0.00°, 100.00%, 50.00%)");
    }

    #[test]
    fn test_hsl_report_normalized_text() {
        let rgb = Rgb::new(0.0, 0.0, 1.0);
        let report = HslReport::new(rgb, Hsl::new(0.5, 1.0, 0.5), false);
        assert_eq!(report.to_string(), "#0000ff -> h=0.500000 s=1.000000 l=0.500000");
    }

    #[test]
    fn test_hsl_report_keeps_out_of_gamut_input() {
        let rgb = Rgb::new(0.5, 1.5, 0.2);
        let report = HslReport::new(rgb, Hsl::new(0.25, 1.0, 0.85), false);
        assert_eq!(report.input, "rgb(0.5, 1.5, 0.2)");
        assert!(!report.to_string().contains("#80ff33"));
    }

    #[test]
    fn test_rgb_report_text() {
        let report = RgbReport::from(Rgb::new(1.0, 0.5, 0.0));
        assert_eq!(
            report.to_string(),
            "#ff8000 rgb(255, 128, 0) r=1.000000 g=0.500000 b=0.000000"
        );
    }

    #[test]
    fn test_render_json() {
        let report = BenchReport {
            iterations: 10,
            elapsed_ms: 1.0,
            ns_per_conversion: 100000.0,
        };
        let json = render(&report, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["iterations"], 10);
        assert_eq!(value["ns_per_conversion"], 100000.0);
    }

    #[test]
    fn test_hsl_units_serialize_lowercase() {
        let report = HslReport::new(Rgb::new(0.0, 0.0, 0.0), Hsl::new(0.0, 0.0, 0.0), true);
        let json = render(&report, OutputFormat::Json).unwrap();
        assert!(json.contains("\"units\": \"degrees\""));
    }

    #[test]
    fn test_verify_report_clean_text() {
        let report = VerifyReport {
            checked: 16_777_216,
            mismatches: 0,
            elapsed_ms: 1234.56,
            first_mismatch: None,
        };
        assert!(report.is_clean());
        assert_eq!(
            report.to_string(),
            "Checked 16777216 colors in 1234.6 ms, 0 mismatch(es)"
        );
    }
}
