use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hsl_color::Strictness;
use hslkit::commands::bench::BenchDirection;
use hslkit::commands::{run_bench, run_saturate, run_to_hsl, run_to_rgb, run_verify};
use hslkit::config::{AppConfig, OutputFormat};
use hslkit::error::CliError;
use hslkit::report::render;

#[derive(Parser)]
#[command(name = "hslkit")]
#[command(about = "Exact RGB <-> HSL color conversion")]
#[command(version)]
struct Cli {
    /// Path to a YAML config file (defaults to $HSLKIT_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Reject channels outside 0.0..=1.0 (plus the configured tolerance)
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an RGB color to HSL
    ToHsl {
        /// Hex color (#1a3c80, f00) or normalized floats "r,g,b"
        color: String,

        /// Print hue in degrees and saturation/lightness in percent
        #[arg(short, long)]
        degrees: bool,
    },
    /// Convert HSL components to RGB
    ToRgb {
        /// Hue (0..1, or degrees with --degrees)
        #[arg(allow_negative_numbers = true)]
        h: f64,
        /// Saturation (0..1, or percent with --degrees)
        s: f64,
        /// Lightness (0..1, or percent with --degrees)
        l: f64,

        /// Read hue in degrees and saturation/lightness in percent
        #[arg(short, long)]
        degrees: bool,
    },
    /// Shift the saturation of a color
    Saturate {
        /// Hex color (#1a3c80, f00) or normalized floats "r,g,b"
        color: String,

        /// Saturation shift in -1.0..=1.0
        #[arg(short, long, allow_negative_numbers = true)]
        shift: f64,
    },
    /// Round-trip every 8-bit RGB color through HSL and back
    Verify,
    /// Time repeated conversions of a sample color
    Bench {
        /// Number of conversions (defaults to the config value)
        #[arg(short = 'n', long)]
        iterations: Option<u64>,

        /// Which conversion to time
        #[arg(long, value_enum, default_value = "to-hsl")]
        direction: BenchDirection,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hslkit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let config_path = AppConfig::resolve_path(cli.config.as_deref());
    let config = AppConfig::load(config_path.as_deref());
    let format = cli.format.unwrap_or(config.format);
    let strict = cli
        .strict
        .then(|| Strictness::new().tolerance(config.tolerance));

    let output = match cli.command {
        Some(Commands::ToHsl { color, degrees }) => render(
            &run_to_hsl(&color, degrees || config.degrees, strict)?,
            format,
        )?,
        Some(Commands::ToRgb { h, s, l, degrees }) => render(
            &run_to_rgb(h, s, l, degrees || config.degrees, strict)?,
            format,
        )?,
        Some(Commands::Saturate { color, shift }) => {
            render(&run_saturate(&color, shift, strict)?, format)?
        }
        Some(Commands::Verify) => {
            let report = run_verify();
            println!("{}", render(&report, format)?);
            if !report.is_clean() {
                return Err(CliError::VerificationFailed {
                    mismatches: report.mismatches,
                    checked: report.checked,
                }
                .into());
            }
            return Ok(());
        }
        Some(Commands::Bench {
            iterations,
            direction,
        }) => render(
            &run_bench(iterations.unwrap_or(config.bench_iterations), direction),
            format,
        )?,
        None => {
            run_status_command(config_path.as_deref(), &config);
            return Ok(());
        }
    };

    println!("{output}");
    Ok(())
}

/// Show version and effective configuration
fn run_status_command(config_path: Option<&std::path::Path>, config: &AppConfig) {
    println!("hslkit v{}", env!("CARGO_PKG_VERSION"));
    println!();
    match config_path {
        Some(path) => println!("Config:     {}", path.display()),
        None => println!("Config:     (defaults)"),
    }
    println!("Format:     {:?}", config.format);
    println!("Degrees:    {}", config.degrees);
    println!("Tolerance:  {}", config.tolerance);
    println!("Bench runs: {}", config.bench_iterations);
    println!();
    println!("Run 'hslkit --help' for available commands.");
}
