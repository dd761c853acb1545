//! hslkit - RGB/HSL conversion tool
//!
//! Command-line front end for the `hsl-color` library.
//! This library exposes modules for integration testing.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
