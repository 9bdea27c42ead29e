//! File dialog helpers.
//!
//! Uses `FileChooserDialog` rather than `FileChooserNative`, which depends on
//! the desktop portal and misbehaves on some desktops.

use gtk4::prelude::*;
use gtk4::{
    ButtonsType, FileChooserAction, FileChooserDialog, FileFilter, MessageDialog, MessageType,
    ResponseType, Widget,
};
use std::path::Path;

/// Create a modal `FileChooserDialog` for **opening** a file.
pub fn open_dialog(title: &str, parent: Option<&impl IsA<gtk4::Window>>) -> FileChooserDialog {
    let dlg = FileChooserDialog::new(
        Some(title),
        parent,
        FileChooserAction::Open,
        &[
            ("Cancel", ResponseType::Cancel),
            ("Open", ResponseType::Accept),
        ],
    );
    dlg.set_default_size(900, 700);
    dlg.set_modal(true);
    dlg
}

/// Create a modal `FileChooserDialog` for **saving** a file.
pub fn save_dialog(title: &str, parent: Option<&impl IsA<gtk4::Window>>) -> FileChooserDialog {
    let dlg = FileChooserDialog::new(
        Some(title),
        parent,
        FileChooserAction::Save,
        &[
            ("Cancel", ResponseType::Cancel),
            ("Save", ResponseType::Accept),
        ],
    );
    dlg.set_default_size(900, 700);
    dlg.set_modal(true);
    dlg
}

/// Add a named filter for `pattern`, e.g. `"*.json"`.
pub fn add_filter(dialog: &FileChooserDialog, name: &str, pattern: &str) {
    let filter = FileFilter::new();
    filter.set_name(Some(name));
    filter.add_pattern(pattern);
    dialog.add_filter(&filter);
}

/// Start the dialog in `dir` when it still exists.
pub fn set_start_folder(dialog: &FileChooserDialog, dir: Option<&Path>) {
    if let Some(dir) = dir.filter(|d| d.is_dir()) {
        let _ = dialog.set_current_folder(Some(&gio::File::for_path(dir)));
    }
}

/// Try to obtain the parent `gtk4::Window` from any widget.
pub fn parent_window(widget: &impl IsA<Widget>) -> Option<gtk4::Window> {
    widget
        .root()
        .and_then(|r| r.downcast::<gtk4::Window>().ok())
}

/// Show a modal error dialog with a title and detail message.
///
/// The dialog destroys itself when the user clicks OK.
pub fn show_error_dialog(title: &str, message: &str, parent: Option<&gtk4::Window>) {
    let mut builder = MessageDialog::builder()
        .message_type(MessageType::Error)
        .buttons(ButtonsType::Ok)
        .text(title)
        .secondary_text(message);

    if let Some(win) = parent {
        builder = builder.transient_for(win).modal(true);
    }

    let dialog = builder.build();
    dialog.connect_response(|d, _| d.destroy());
    dialog.show();
}
