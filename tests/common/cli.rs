//! Runs the compiled `hslkit` binary.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured result of one invocation
#[derive(Debug)]
pub struct CliOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {}", self.stdout))
    }
}

/// Builder for `hslkit` invocations with an isolated environment
pub struct TestCli {
    config: Option<PathBuf>,
}

impl TestCli {
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Pass `--config <path>` on every run
    pub fn with_config(path: &Path) -> Self {
        Self {
            config: Some(path.to_path_buf()),
        }
    }

    pub fn run(&self, args: &[&str]) -> CliOutput {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_hslkit"));
        cmd.env_remove("HSLKIT_CONFIG").env_remove("RUST_LOG");
        if let Some(config) = &self.config {
            cmd.arg("--config").arg(config);
        }
        cmd.args(args);

        let output = cmd.output().expect("Failed to run hslkit binary");
        CliOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestCli {
    fn default() -> Self {
        Self::new()
    }
}
