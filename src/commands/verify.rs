use hsl_color::round_trip_sweep;
use std::time::Instant;

use crate::report::VerifyReport;

/// Run the exhaustive 8-bit round-trip check.
pub fn run_verify() -> VerifyReport {
    tracing::info!("Checking all 16777216 RGB triples");
    let start = Instant::now();
    let sweep = round_trip_sweep();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if let Some(m) = &sweep.first_mismatch {
        tracing::error!(
            input = ?m.input,
            output = ?m.output,
            mismatches = sweep.mismatches,
            "Round trip mismatch"
        );
    } else {
        tracing::info!(checked = sweep.checked, elapsed_ms, "Round trip clean");
    }

    VerifyReport::new(&sweep, elapsed_ms)
}
