//! Layout configuration persistence
//!
//! Stores engine defaults in `~/.config/floatdock/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Layout engine configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Distance from an edge (px) that counts as "near" during a drag
    #[serde(default = "default_gravity_zone")]
    pub gravity_zone: f32,

    /// Dock/undock automatically on drag end instead of only notifying
    #[serde(default = "default_true")]
    pub auto_dock: bool,

    /// Height of a panel header (extent of a collapsed panel in a sidebar)
    #[serde(default = "default_header_height")]
    pub header_height: f32,

    /// Space between stacked panels in a sidebar
    #[serde(default = "default_sidebar_gap")]
    pub sidebar_gap: f32,

    /// Width of the left/right sidebars
    #[serde(default = "default_side_sidebar_size")]
    pub side_sidebar_size: f32,

    /// Height of the top/bottom sidebars
    #[serde(default = "default_edge_sidebar_size")]
    pub edge_sidebar_size: f32,

    /// Write panel state to the store on minimize/dismiss/collapse
    #[serde(default = "default_true")]
    pub persist: bool,
}

fn default_gravity_zone() -> f32 {
    50.0
}

fn default_true() -> bool {
    true
}

fn default_header_height() -> f32 {
    28.0
}

fn default_sidebar_gap() -> f32 {
    4.0
}

fn default_side_sidebar_size() -> f32 {
    250.0
}

fn default_edge_sidebar_size() -> f32 {
    200.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gravity_zone: default_gravity_zone(),
            auto_dock: true,
            header_height: default_header_height(),
            sidebar_gap: default_sidebar_gap(),
            side_sidebar_size: default_side_sidebar_size(),
            edge_sidebar_size: default_edge_sidebar_size(),
            persist: true,
        }
    }
}

impl LayoutConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
