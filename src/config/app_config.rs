//! Application configuration management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// UI configuration
    pub ui: UiConfig,
}

/// Window-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial window width in logical pixels
    pub width: u32,
    /// Initial window height in logical pixels
    pub height: u32,
}

/// UI-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Font size for notice list entries
    pub font_size: u32,
    /// Log level
    pub log_level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Digital Notice Board".to_string(),
            width: 500,
            height: 300,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            font_size: 14,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Path of the optional RON configuration file
    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(crate::APP_NAME).join("config.ron"))
    }

    /// Load configuration, falling back to defaults when no usable file exists
    pub fn load() -> Self {
        let Some(path) = Self::config_file_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::debug!(
                    "No configuration loaded from {} ({}), using defaults",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Load configuration from a RON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = ron::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_initial_window() {
        let config = AppConfig::default();
        assert_eq!(config.window.title, "Digital Notice Board");
        assert_eq!(config.window.width, 500);
        assert_eq!(config.window.height, 300);
        assert_eq!(config.ui.font_size, 14);
        assert_eq!(config.ui.log_level, "info");
    }

    #[test]
    fn loads_ron_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.ron");
        let ron_string =
            ron::ser::to_string_pretty(&AppConfig::default(), ron::ser::PrettyConfig::default())
                .unwrap();
        fs::write(&path, ron_string).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.window.width, 500);
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does-not-exist.ron");
        assert!(AppConfig::load_from(&path).is_err());
    }
}
