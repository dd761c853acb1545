//! Test fixtures and constants.

use std::path::PathBuf;
use tempfile::TempDir;

/// Well-known colors as (hex, [r, g, b], (hue degrees, saturation %, lightness %))
pub mod colors {
    pub type Named = (&'static str, [u8; 3], (f64, f64, f64));

    pub const RED: Named = ("#ff0000", [255, 0, 0], (0.0, 100.0, 50.0));
    pub const LIME: Named = ("#00ff00", [0, 255, 0], (120.0, 100.0, 50.0));
    pub const BLUE: Named = ("#0000ff", [0, 0, 255], (240.0, 100.0, 50.0));
    pub const GRAY: Named = ("#808080", [128, 128, 128], (0.0, 0.0, 50.196_078_431_372_55));
    /// Sample color used by the benchmark
    pub const SAMPLE: Named =
        ("#193c80", [25, 60, 128], (219.611_650_485_436_9, 67.320_261_437_908_5, 30.0));

    pub const ALL: [Named; 5] = [RED, LIME, BLUE, GRAY, SAMPLE];
}

/// A config file written to a temporary directory
pub struct ConfigFixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl ConfigFixture {
    pub fn new(yaml: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("hslkit.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        Self { dir, path }
    }
}
