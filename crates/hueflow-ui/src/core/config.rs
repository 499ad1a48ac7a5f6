//! User configuration management
//!
//! Handles saving and loading user preferences: language, theme, logging and
//! the custom palettes the user confirmed recently.

use crate::theme::ThemeConfig;
use hueflow_core::{ColorRange, LogConfig, DEFAULT_STEP_COLOR};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Number of confirmed custom palettes remembered
pub const MAX_RECENT_PALETTES: usize = 10;

/// Errors while persisting the user configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("Config I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid config JSON
    #[error("Config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The platform has no config directory
    #[error("No config directory available")]
    NoConfigDir,
}

/// User configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Preferred language code (e.g., "en", "de")
    pub language: String,
    /// UI Theme settings
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Color appended by "Add Step" when there is nothing to duplicate
    #[serde(default = "default_step_color")]
    pub default_step_color: String,
    /// Let the picker edit alpha
    #[serde(default)]
    pub picker_alpha: bool,
    /// Confirmed custom palettes, most recent first
    #[serde(default)]
    pub recent_palettes: Vec<ColorRange>,
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,

    /// File this config was loaded from; `None` uses the platform default
    #[serde(skip)]
    path: Option<PathBuf>,
}

fn default_step_color() -> String {
    DEFAULT_STEP_COLOR.to_string()
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            theme: ThemeConfig::default(),
            default_step_color: default_step_color(),
            picker_alpha: false,
            recent_palettes: Vec::new(),
            log: LogConfig::default(),
            path: None,
        }
    }
}

impl UserConfig {
    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("HueFlow");
            p.push("config.json");
            p
        })
    }

    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`, falling back to defaults.
    /// Later saves go back to `path`.
    pub fn load_from(path: &Path) -> Self {
        let mut config = if path.exists() {
            match Self::read(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring config at {:?}: {}", path, e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };
        config.path = Some(path.to_path_buf());
        config
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .clone()
            .or_else(Self::default_path)
            .ok_or(ConfigError::NoConfigDir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    fn save_or_log(&self) {
        if let Err(e) = self.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }

    /// Update language and save
    pub fn set_language(&mut self, lang: &str) {
        self.language = lang.to_string();
        self.save_or_log();
    }

    /// Update theme and save
    pub fn set_theme(&mut self, theme: ThemeConfig) {
        self.theme = theme;
        self.save_or_log();
    }

    /// Remember a confirmed custom palette and save
    pub fn add_recent_palette(&mut self, palette: &ColorRange) {
        if !palette.is_custom() {
            return;
        }
        if let Err(e) = palette.validate() {
            tracing::warn!("Not remembering palette: {}", e);
            return;
        }
        self.recent_palettes.retain(|p| p.colors != palette.colors);
        self.recent_palettes.insert(0, palette.clone());
        self.recent_palettes.truncate(MAX_RECENT_PALETTES);
        self.save_or_log();
    }
}
