use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "HSLKIT_CONFIG";

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Allowed distance outside 0.0..=1.0 when `--strict` is on
    #[serde(default)]
    pub tolerance: f64,

    /// Conversions timed by `bench` when `--iterations` is not given
    #[serde(default = "default_bench_iterations")]
    pub bench_iterations: u64,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Read and print hue in degrees, saturation/lightness in percent
    #[serde(default)]
    pub degrees: bool,
}

fn default_bench_iterations() -> u64 {
    1_000_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            bench_iterations: default_bench_iterations(),
            format: OutputFormat::Text,
            degrees: false,
        }
    }
}

impl AppConfig {
    /// Pick the config file: explicit path first, then `HSLKIT_CONFIG`.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as null, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load configuration, falling back to defaults on any problem
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        tolerance = config.tolerance,
                        bench_iterations = config.bench_iterations,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
