use hsl_color::{ColorError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid color '{input}': {reason}")]
    InvalidColor { input: String, reason: String },

    #[error("Color parse error: {0}")]
    ParseColor(#[from] ParseColorError),

    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Round trip failed for {mismatches} of {checked} colors")]
    VerificationFailed { mismatches: u64, checked: u64 },

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_message() {
        let error = CliError::InvalidColor {
            input: "1,2".to_string(),
            reason: "expected 3 components".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid color '1,2': expected 3 components"
        );
    }

    #[test]
    fn test_verification_failed_message() {
        let error = CliError::VerificationFailed {
            mismatches: 3,
            checked: 16_777_216,
        };
        assert_eq!(
            error.to_string(),
            "Round trip failed for 3 of 16777216 colors"
        );
    }

    #[test]
    fn test_from_color_error() {
        let error: CliError = ColorError::InvalidArgument {
            channel: "s",
            value: 2.0,
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Color error: invalid argument: s = 2 is out of range"
        );
    }

    #[test]
    fn test_from_parse_color_error() {
        let error: CliError = ParseColorError::WrongLength { digits: 2 }.into();
        match error {
            CliError::ParseColor(_) => {}
            _ => panic!("Expected ParseColor variant"),
        }
    }
}
