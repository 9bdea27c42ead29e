//! Configuration and settings management for TileKit
//!
//! Provides configuration file handling and validation. Supports JSON and TOML
//! file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - UI preferences (window size, defaults for new objects)
//! - Tile defaults (seed values for the tile size inputs)
//! - File history (last directory, recent layouts)

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// UI preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Main window width in pixels
    pub window_width: u32,
    /// Main window height in pixels
    pub window_height: u32,
    /// Object name prefilled in the name entry
    #[serde(default)]
    pub default_object_name: String,
    /// Color preselected in the color button (`#rrggbb`)
    #[serde(default = "default_object_color")]
    pub default_object_color: String,
}

fn default_object_color() -> String {
    "#ff7f50".to_string()
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_width: 1000,
            window_height: 760,
            default_object_name: String::new(),
            default_object_color: default_object_color(),
        }
    }
}

/// Tile defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileSettings {
    /// Tile width in millimetres
    pub tile_width: f64,
    /// Tile height in millimetres
    pub tile_height: f64,
}

impl Default for TileSettings {
    fn default() -> Self {
        Self {
            tile_width: 100.0,
            tile_height: 100.0,
        }
    }
}

/// File history settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSettings {
    /// Directory of the last import or export
    #[serde(default)]
    pub last_directory: Option<PathBuf>,
    /// Recent layouts, most recent first
    #[serde(default)]
    pub recent_layouts: Vec<PathBuf>,
    /// Maximum length of `recent_layouts`
    pub recent_files_count: usize,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            last_directory: None,
            recent_layouts: Vec::new(),
            recent_files_count: 10,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiSettings,
    /// Tile defaults
    #[serde(default)]
    pub tiles: TileSettings,
    /// File history
    #[serde(default)]
    pub files: FileSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.ui.window_width == 0 || self.ui.window_height == 0 {
            return Err(SettingsError::invalid(
                "ui.window_size",
                "window dimensions must be > 0",
            ));
        }

        if !is_hex_color(&self.ui.default_object_color) {
            return Err(SettingsError::invalid(
                "ui.default_object_color",
                format!("'{}' is not a #rrggbb color", self.ui.default_object_color),
            ));
        }

        if !(self.tiles.tile_width > 0.0) || !(self.tiles.tile_height > 0.0) {
            return Err(SettingsError::invalid(
                "tiles",
                "tile dimensions must be > 0",
            ));
        }

        Ok(())
    }

    /// Add file to the recent layouts list and remember its directory
    pub fn add_recent_file(&mut self, path: PathBuf) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.files.last_directory = Some(parent.to_path_buf());
        }

        self.files.recent_layouts.retain(|f| f != &path);
        self.files.recent_layouts.insert(0, path);
        self.files
            .recent_layouts
            .truncate(self.files.recent_files_count);
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
