//! Subcommand implementations.
//!
//! Each command returns a report instead of printing, so the binary decides
//! on the output format and tests can inspect the values directly.

pub mod bench;
pub mod convert;
pub mod saturate;
pub mod verify;

pub use bench::run_bench;
pub use convert::{run_to_hsl, run_to_rgb};
pub use saturate::run_saturate;
pub use verify::run_verify;
