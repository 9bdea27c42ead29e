//! Locating, loading and saving the persisted configuration.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const APP_DIR_NAME: &str = "tilekit";
const CONFIG_FILE_NAME: &str = "config.json";

/// Resolves the platform config location and moves a [`Config`] in and out of it.
pub struct SettingsManager;

impl SettingsManager {
    /// Platform config directory for the application, e.g. `~/.config/tilekit`.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Create the config directory if it does not exist yet.
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Load the config at the default location, falling back to defaults.
    pub fn load() -> Config {
        match Self::config_file_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(e) => {
                warn!("Using default settings: {}", e);
                Config::default()
            }
        }
    }

    /// Load `path`, or return defaults when it is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Config {
        if !path.exists() {
            info!("No settings file at {:?}, using defaults", path);
            return Config::default();
        }

        match Config::load_from_file(path) {
            Ok(config) => {
                info!("Loaded settings from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Failed to load settings from {:?}: {}", path, e);
                Config::default()
            }
        }
    }

    /// Save the config to the default location.
    pub fn save(config: &Config) -> SettingsResult<()> {
        Self::ensure_config_dir()?;
        let path = Self::config_file_path()?;
        config.save_to_file(&path)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}
