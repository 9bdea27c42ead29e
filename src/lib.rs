//! # TileKit
//!
//! Sketch rectangular objects on a millimeter grid and count how many
//! fixed-size tiles each one needs.
//!
//! ## Architecture
//!
//! TileKit is organized as a workspace with multiple crates:
//!
//! 1. **tilekit-layout** - Shapes, tile math, drag interaction, rendering, layout files
//! 2. **tilekit-settings** - Persisted configuration
//! 3. **tilekit-ui** - GTK4 application: canvas, controls, dialogs
//! 4. **tilekit** - Main binary that wires logging and launches the UI

pub use tilekit_layout::{
    compute_tiles, LayoutError, LayoutRecord, LayoutState, Point, RectExtent, Shape, ShapeStore,
    TileConfig, TileSummary,
};
pub use tilekit_settings::{Config, SettingsManager};
pub use tilekit_ui::ui;

/// Version string from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// UTC timestamp recorded by the build script.
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with tracing
///
/// Honors `RUST_LOG`; INFO is always enabled.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    // Release builds on Windows have no console, so log next to the executable
    #[cfg(all(target_os = "windows", not(debug_assertions)))]
    {
        use std::fs::OpenOptions;

        let log_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| std::path::PathBuf::from("."));

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_dir.join("tilekit.log"))
        {
            Ok(file) => {
                let fmt_layer = fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true)
                    .with_thread_names(true)
                    .with_line_number(true);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt_layer)
                    .try_init()?;
            }
            Err(_) => {
                tracing_subscriber::registry().with(env_filter).try_init()?;
            }
        }
    }

    #[cfg(not(all(target_os = "windows", not(debug_assertions))))]
    {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_target(true)
            .with_level(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
