use hsl_color::{hsl_to_rgb, rgb_to_hsl};
use std::hint::black_box;
use std::time::Instant;

use crate::report::BenchReport;

/// Sample color timed by the benchmark: (25, 60, 128)
const SAMPLE: (f64, f64, f64) = (25.0 / 255.0, 60.0 / 255.0, 128.0 / 255.0);

/// Which direction `bench` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BenchDirection {
    /// RGB -> HSL only
    ToHsl,
    /// HSL -> RGB only
    ToRgb,
    /// Full round trip
    RoundTrip,
}

/// Time `iterations` conversions of the sample color.
pub fn run_bench(iterations: u64, direction: BenchDirection) -> BenchReport {
    let (r, g, b) = SAMPLE;
    let hsl = rgb_to_hsl(r, g, b);
    tracing::info!(iterations, ?direction, "Starting benchmark");

    let start = Instant::now();
    for _ in 0..iterations {
        match direction {
            BenchDirection::ToHsl => {
                black_box(rgb_to_hsl(black_box(r), black_box(g), black_box(b)));
            }
            BenchDirection::ToRgb => {
                black_box(hsl_to_rgb(black_box(hsl.h), black_box(hsl.s), black_box(hsl.l)));
            }
            BenchDirection::RoundTrip => {
                let hsl = rgb_to_hsl(black_box(r), black_box(g), black_box(b));
                black_box(hsl_to_rgb(hsl.h, hsl.s, hsl.l));
            }
        }
    }
    let elapsed = start.elapsed();

    let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
    let ns_per_conversion = if iterations == 0 {
        0.0
    } else {
        elapsed.as_nanos() as f64 / iterations as f64
    };

    BenchReport {
        iterations,
        elapsed_ms,
        ns_per_conversion,
    }
}
