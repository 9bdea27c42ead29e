use gtk4::prelude::*;
use gtk4::{ApplicationWindow, CssProvider, HeaderBar, MenuButton, StyleContext};
use libadwaita::Application as AdwApplication;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{info, warn};

use crate::ui::gtk::layout_view::LayoutView;
use tilekit_settings::SettingsManager;

pub fn main() {
    let app = AdwApplication::builder()
        .application_id("io.github.tilekit.TileKit")
        .build();

    app.connect_startup(|_| {
        load_css();
    });

    app.connect_activate(|app| {
        let settings = Rc::new(RefCell::new(SettingsManager::load()));
        let (width, height) = {
            let config = settings.borrow();
            (config.ui.window_width, config.ui.window_height)
        };

        let window = ApplicationWindow::builder()
            .application(app)
            .title("TileKit")
            .default_width(width as i32)
            .default_height(height as i32)
            .build();

        let view = LayoutView::new(settings.clone());

        let window_title = window.clone();
        view.connect_title_changed(move |title| window_title.set_title(Some(title)));

        // Header bar with the file menu
        let header = HeaderBar::new();
        let file_menu = gio::Menu::new();
        file_menu.append(Some("New Layout"), Some("app.new"));
        file_menu.append(Some("Import Layout..."), Some("app.import"));
        file_menu.append_submenu(Some("Recent Layouts"), &view.recent_menu);
        file_menu.append(Some("Export Layout..."), Some("app.export"));
        file_menu.append(Some("Export Image..."), Some("app.export-image"));
        let quit_section = gio::Menu::new();
        quit_section.append(Some("Quit"), Some("app.quit"));
        file_menu.append_section(None, &quit_section);

        let menu_button = MenuButton::builder()
            .icon_name("open-menu-symbolic")
            .menu_model(&file_menu)
            .build();
        header.pack_end(&menu_button);
        window.set_titlebar(Some(&header));
        window.set_child(Some(&view.widget));

        // Actions
        let new_action = gio::SimpleAction::new("new", None);
        let view_new = view.clone();
        new_action.connect_activate(move |_, _| view_new.new_layout());
        app.add_action(&new_action);

        let import_action = gio::SimpleAction::new("import", None);
        let view_import = view.clone();
        import_action.connect_activate(move |_, _| view_import.import_layout());
        app.add_action(&import_action);

        let recent_action = gio::SimpleAction::new("import-recent", Some(glib::VariantTy::STRING));
        let view_recent = view.clone();
        recent_action.connect_activate(move |_, param| {
            if let Some(path) = param.and_then(|p| p.get::<String>()) {
                view_recent.start_import(PathBuf::from(path));
            }
        });
        app.add_action(&recent_action);

        let export_action = gio::SimpleAction::new("export", None);
        let view_export = view.clone();
        export_action.connect_activate(move |_, _| view_export.export_layout());
        app.add_action(&export_action);

        let image_action = gio::SimpleAction::new("export-image", None);
        let view_image = view.clone();
        image_action.connect_activate(move |_, _| view_image.export_image());
        app.add_action(&image_action);

        let quit_action = gio::SimpleAction::new("quit", None);
        let window_quit = window.clone();
        quit_action.connect_activate(move |_, _| window_quit.close());
        app.add_action(&quit_action);

        app.set_accels_for_action("app.new", &["<Control>n"]);
        app.set_accels_for_action("app.import", &["<Control>o"]);
        app.set_accels_for_action("app.export", &["<Control>s"]);
        app.set_accels_for_action("app.export-image", &["<Control><Shift>e"]);
        app.set_accels_for_action("app.quit", &["<Control>q"]);

        // Persist window size on close
        let settings_close = settings.clone();
        window.connect_close_request(move |window| {
            let mut config = settings_close.borrow_mut();
            let (w, h) = (window.width(), window.height());
            if w > 0 && h > 0 {
                config.ui.window_width = w as u32;
                config.ui.window_height = h as u32;
            }
            if let Err(e) = SettingsManager::save(&config) {
                warn!("Failed to save settings: {}", e);
            }
            glib::Propagation::Proceed
        });

        info!("Main window ready");
        window.present();
    });

    app.run();
}

#[allow(deprecated)]
fn load_css() {
    let provider = CssProvider::new();
    provider.load_from_data(include_str!("ui/gtk/style.css"));

    match gtk4::gdk::Display::default() {
        Some(display) => StyleContext::add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        ),
        None => warn!("No display available, skipping stylesheet"),
    }
}
