//! TileKit Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{Config, FileSettings, TileSettings, UiSettings};
pub use error::{SettingsError, SettingsResult};
pub use manager::SettingsManager;
