//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use super::cli::CliOutput;

/// Assert two floats are within `tol` of each other
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "Expected {expected} (+/- {tol}), got {actual}"
    );
}

/// Assert the command exited successfully
pub fn assert_success(output: &CliOutput) {
    assert!(
        output.success,
        "Expected success, got exit code {:?}. Stderr: {}",
        output.code, output.stderr
    );
}

/// Assert the command failed and mentioned `needle` on stderr
pub fn assert_failure_contains(output: &CliOutput, needle: &str) {
    assert!(
        !output.success,
        "Expected failure, got success. Stdout: {}",
        output.stdout
    );
    assert!(
        output.stderr.contains(needle),
        "Expected stderr to contain {needle:?}, got: {}",
        output.stderr
    );
}

/// Assert stdout is JSON and the given field has the expected value
pub fn assert_json_field(output: &CliOutput, field: &str, expected: serde_json::Value) {
    let json = output.json();
    assert_eq!(
        json[field],
        expected,
        "Unexpected value for {field}. Full output: {}",
        serde_json::to_string_pretty(&json).unwrap()
    );
}
