//! Where token-field keeps its files
//!
//! - Unix/macOS: `$XDG_CONFIG_HOME/token-field/` or `~/.config/token-field/`
//! - Windows: `%APPDATA%\token-field\`
//!
//! Hosts that want the settings next to their own can skip these helpers and
//! use [`FieldConfig::load_from`](crate::FieldConfig::load_from) directly.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const APP_DIR: &str = "token-field";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// Base config directory, or None when neither the platform variable nor a
/// home directory is known
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        resolve_config_dir(std::env::var_os("APPDATA").map(PathBuf::from), None)
    }

    #[cfg(not(target_os = "windows"))]
    {
        resolve_config_dir(
            std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            dirs::home_dir(),
        )
    }
}

/// Pick the base directory: an explicit config root wins over `<home>/.config`.
/// Empty roots are ignored, as XDG requires.
fn resolve_config_dir(config_root: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    config_root
        .filter(|root| !root.as_os_str().is_empty())
        .or_else(|| home.map(|h| h.join(".config")))
        .map(|root| root.join(APP_DIR))
}

/// `<config dir>/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// `<config dir>/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().context("No config directory available")?;
    create_dir(&logs)?;
    Ok(logs)
}

fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_root_wins() {
        let dir = resolve_config_dir(Some("/xdg".into()), Some("/home/u".into()));
        assert_eq!(dir, Some(PathBuf::from("/xdg/token-field")));
    }

    #[test]
    fn test_falls_back_to_home() {
        let dir = resolve_config_dir(None, Some("/home/u".into()));
        assert_eq!(dir, Some(PathBuf::from("/home/u/.config/token-field")));

        let dir = resolve_config_dir(Some(PathBuf::new()), Some("/home/u".into()));
        assert_eq!(dir, Some(PathBuf::from("/home/u/.config/token-field")));
    }

    #[test]
    fn test_nothing_known() {
        assert_eq!(resolve_config_dir(None, None), None);
    }
}
