//! Command-line argument parsing for the replay binary
//!
//! Supports:
//! - Replaying a YAML script against a fresh workspace
//! - Overriding gravity zone and auto-dock from the config
//! - Persisting panel state to a directory

use clap::Parser;
use std::path::PathBuf;

use crate::config::LayoutConfig;

/// Replay panel gestures through the layout engine
#[derive(Parser, Debug)]
#[command(name = "floatdock", version, about = "Replay panel gestures through the layout engine")]
pub struct CliArgs {
    /// YAML script with bounds, panels and steps
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Config file (defaults to ~/.config/floatdock/config.yaml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the gravity zone width in pixels
    #[arg(short, long, value_name = "PX")]
    pub gravity_zone: Option<f32>,

    /// Only emit advisory dock notifications, never change panel modes
    #[arg(long)]
    pub no_auto_dock: bool,

    /// Print every emitted event, not just the final layout
    #[arg(short, long)]
    pub events: bool,

    /// Persist panel state on disk; without DIR, under ~/.config/floatdock/panels/
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    pub store: Option<Option<PathBuf>>,
}

impl CliArgs {
    /// Resolve the layout config: file (or default location), then flag overrides
    pub fn layout_config(&self) -> LayoutConfig {
        let mut config = match &self.config {
            Some(path) => LayoutConfig::load_from(path),
            None => LayoutConfig::load(),
        };
        if let Some(zone) = self.gravity_zone {
            config.gravity_zone = zone;
        }
        if self.no_auto_dock {
            config.auto_dock = false;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_on_top_of_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "gravity_zone: 30\nsidebar_gap: 8\n").unwrap();

        let args = CliArgs::parse_from([
            "floatdock",
            "script.yaml",
            "--config",
            path.to_str().unwrap(),
            "--no-auto-dock",
        ]);
        let config = args.layout_config();
        assert_eq!(config.gravity_zone, 30.0);
        assert_eq!(config.sidebar_gap, 8.0);
        assert!(!config.auto_dock);

        let args = CliArgs::parse_from([
            "floatdock",
            "script.yaml",
            "--config",
            path.to_str().unwrap(),
            "-g",
            "12",
        ]);
        assert_eq!(args.layout_config().gravity_zone, 12.0);
        assert_eq!(args.store, None);
    }

    #[test]
    fn test_store_with_and_without_dir() {
        let args = CliArgs::parse_from(["floatdock", "script.yaml", "--store"]);
        assert_eq!(args.store, Some(None));

        let args = CliArgs::parse_from(["floatdock", "script.yaml", "--store", "/tmp/panels"]);
        assert_eq!(args.store, Some(Some(PathBuf::from("/tmp/panels"))));
    }
}
