//! # TileKit UI
//!
//! GTK-based user interface for TileKit.

pub mod gtk_app;
pub mod ui;

pub use tilekit_settings::{Config, SettingsManager};
