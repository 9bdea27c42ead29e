// On Windows, hide the console window for GUI applications
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

use tilekit::{init_logging, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("TileKit {} (built {})", VERSION, BUILD_DATE);

    tilekit_ui::gtk_app::main();

    Ok(())
}
