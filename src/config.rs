//! Process-wide text field configuration
//!
//! Stored in `~/.config/token-field/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings shared by every field of a [`TextFields`](crate::TextFields) context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Host ticks between caret visibility toggles (0 = never blink)
    #[serde(default = "default_blink_delay")]
    pub blink_delay: u32,

    /// Consume Return in focused fields and raise their activation flag,
    /// instead of leaving the key to the host
    #[serde(default = "default_handles_return")]
    pub handles_return: bool,

    /// Horizontal nudge in pixels applied to the caret so it sits between
    /// glyphs. Depends on the font renderer.
    #[serde(default = "default_caret_offset")]
    pub caret_offset: f32,
}

fn default_blink_delay() -> u32 {
    30
}

fn default_handles_return() -> bool {
    true
}

fn default_caret_offset() -> f32 {
    1.0
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            blink_delay: default_blink_delay(),
            handles_return: default_handles_return(),
            caret_offset: default_caret_offset(),
        }
    }
}

impl FieldConfig {
    /// Load config from the user config dir, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
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

    /// Save config to the user config dir
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
