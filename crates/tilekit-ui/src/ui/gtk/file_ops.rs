//! File operations for LayoutView

use crate::ui::gtk::file_dialog::{
    add_filter, open_dialog, parent_window, save_dialog, set_start_folder, show_error_dialog,
};
use crate::ui::gtk::layout_view::LayoutView;
use gtk4::prelude::*;
use gtk4::ResponseType;
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tilekit_layout::{save_png, LayoutError, LayoutRecord, EXPORT_FILE_NAME};
use tilekit_settings::SettingsManager;
use tokio::runtime::Runtime;
use tracing::{error, info, warn};

/// Runtime for file reads so the GTK main loop never blocks on disk.
static RUNTIME: Lazy<std::io::Result<Runtime>> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("tilekit-io")
        .enable_all()
        .build()
});

impl LayoutView {
    pub fn new_layout(&self) {
        self.state.borrow_mut().new_layout();
        self.refresh();
        info!("New layout created");
    }

    pub fn export_layout(self: &Rc<Self>) {
        let parent = parent_window(&self.widget);
        let dialog = save_dialog("Export Layout", parent.as_ref());
        dialog.set_current_name(EXPORT_FILE_NAME);
        add_filter(&dialog, "Layout Files", "*.json");
        set_start_folder(&dialog, self.last_directory().as_deref());

        let view = self.clone();
        dialog.connect_response(move |dialog, response| {
            if response == ResponseType::Accept {
                if let Some(path) = dialog.file().and_then(|f| f.path()) {
                    let result = view.state.borrow_mut().export_to_file(&path);
                    match result {
                        Ok(()) => {
                            view.remember_file(&path);
                            view.update_title();
                        }
                        Err(e) => {
                            error!("Failed to export layout: {}", e);
                            view.show_error("Export failed", &e.to_string());
                        }
                    }
                }
            }
            dialog.close();
        });

        dialog.show();
    }

    pub fn import_layout(self: &Rc<Self>) {
        let parent = parent_window(&self.widget);
        let dialog = open_dialog("Import Layout", parent.as_ref());
        add_filter(&dialog, "Layout Files", "*.json");
        set_start_folder(&dialog, self.last_directory().as_deref());

        let view = self.clone();
        dialog.connect_response(move |dialog, response| {
            if response == ResponseType::Accept {
                if let Some(path) = dialog.file().and_then(|f| f.path()) {
                    view.start_import(path);
                }
            }
            dialog.close();
        });

        dialog.show();
    }

    /// Reads `path` off the main loop and applies it once the read resolves.
    pub fn start_import(self: &Rc<Self>, path: PathBuf) {
        let runtime = match RUNTIME.as_ref() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!("No I/O runtime for import: {}", e);
                self.show_error("Import failed", &e.to_string());
                return;
            }
        };

        info!("Importing layout from {:?}", path);
        let read_path = path.clone();
        let handle = runtime.spawn(async move { LayoutRecord::load_from_file(read_path).await });

        let view = self.clone();
        glib::spawn_future_local(async move {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(LayoutError::Io(std::io::Error::other(e))),
            };
            view.finish_import(&path, result);
        });
    }

    fn finish_import(&self, path: &Path, result: tilekit_layout::Result<LayoutRecord>) {
        let outcome = self.state.borrow_mut().finish_import_from(path, result);
        match outcome {
            Ok(()) => {
                self.sync_tile_inputs();
                self.remember_file(path);
                self.refresh();
            }
            Err(e) => {
                let message = if e.is_parse_error() {
                    format!("{} is not a valid layout file.\n\n{}", path.display(), e)
                } else {
                    format!("Could not read {}.\n\n{}", path.display(), e)
                };
                self.show_error("Import failed", &message);
            }
        }
    }

    /// Saves a PNG snapshot of the current canvas.
    pub fn export_image(self: &Rc<Self>) {
        let parent = parent_window(&self.widget);
        let dialog = save_dialog("Export Image", parent.as_ref());
        dialog.set_current_name("layout.png");
        add_filter(&dialog, "PNG Images", "*.png");
        set_start_folder(&dialog, self.last_directory().as_deref());

        let view = self.clone();
        dialog.connect_response(move |dialog, response| {
            if response == ResponseType::Accept {
                if let Some(path) = dialog.file().and_then(|f| f.path()) {
                    let result = view
                        .state
                        .borrow()
                        .snapshot_image()
                        .and_then(|image| save_png(&image, &path));
                    if let Err(e) = result {
                        error!("Failed to export image: {}", e);
                        view.show_error("Export failed", &e.to_string());
                    }
                }
            }
            dialog.close();
        });

        dialog.show();
    }

    fn last_directory(&self) -> Option<PathBuf> {
        self.settings.borrow().files.last_directory.clone()
    }

    /// Adds `path` to the recent layouts and persists settings.
    fn remember_file(&self, path: &Path) {
        {
            let mut settings = self.settings.borrow_mut();
            settings.add_recent_file(path.to_path_buf());
            if let Err(e) = SettingsManager::save(&settings) {
                warn!("Failed to save settings: {}", e);
            }
        }
        self.rebuild_recent_menu();
    }

    fn show_error(&self, title: &str, message: &str) {
        let parent = parent_window(&self.widget);
        show_error_dialog(title, message, parent.as_ref());
    }
}
