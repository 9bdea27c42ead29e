//! Input row above the canvas: object name, color, tile size and actions.

// ColorButton is deprecated in GTK 4.10 but ColorDialogButton needs a newer runtime.
#![allow(deprecated)]

use gtk4::gdk::RGBA;
use gtk4::prelude::*;
use gtk4::{Adjustment, Box, Button, ColorButton, Entry, Label, Orientation, SpinButton};
use tilekit_layout::TileConfig;
use tilekit_settings::Config;

pub struct Controls {
    pub widget: Box,
    pub name_entry: Entry,
    pub color_button: ColorButton,
    pub tile_width: SpinButton,
    pub tile_height: SpinButton,
    pub recalc_button: Button,
    pub export_button: Button,
    pub import_button: Button,
    pub export_image_button: Button,
    pub new_button: Button,
}

impl Controls {
    pub fn new(config: &Config) -> Self {
        let widget = Box::new(Orientation::Vertical, 6);
        widget.set_margin_top(6);
        widget.set_margin_bottom(6);
        widget.set_margin_start(6);
        widget.set_margin_end(6);

        let object_row = Box::new(Orientation::Horizontal, 6);
        let name_entry = Entry::new();
        name_entry.set_placeholder_text(Some("Object Name"));
        name_entry.set_text(&config.ui.default_object_name);
        let color_button = ColorButton::with_rgba(
            &parse_rgba(&config.ui.default_object_color).unwrap_or(RGBA::new(1.0, 0.5, 0.31, 1.0)),
        );
        color_button.set_title("Object Color");
        object_row.append(&Label::new(Some("Name:")));
        object_row.append(&name_entry);
        object_row.append(&Label::new(Some("Color:")));
        object_row.append(&color_button);

        let tile_row = Box::new(Orientation::Horizontal, 6);
        let tile_width = tile_spin(config.tiles.tile_width);
        let tile_height = tile_spin(config.tiles.tile_height);
        let recalc_button = Button::with_label("Recalculate Tiles");
        tile_row.append(&Label::new(Some("Tile Width (mm):")));
        tile_row.append(&tile_width);
        tile_row.append(&Label::new(Some("Tile Height (mm):")));
        tile_row.append(&tile_height);
        tile_row.append(&recalc_button);

        let file_row = Box::new(Orientation::Horizontal, 6);
        let new_button = Button::with_label("New Layout");
        let export_button = Button::with_label("Export Layout");
        let import_button = Button::with_label("Import Layout");
        let export_image_button = Button::with_label("Export Image");
        file_row.append(&new_button);
        file_row.append(&export_button);
        file_row.append(&import_button);
        file_row.append(&export_image_button);

        widget.append(&object_row);
        widget.append(&tile_row);
        widget.append(&file_row);

        Self {
            widget,
            name_entry,
            color_button,
            tile_width,
            tile_height,
            recalc_button,
            export_button,
            import_button,
            export_image_button,
            new_button,
        }
    }

    pub fn object_name(&self) -> String {
        self.name_entry.text().to_string()
    }

    pub fn object_color(&self) -> String {
        rgba_to_hex(&self.color_button.rgba())
    }

    pub fn tile_config(&self) -> TileConfig {
        TileConfig::new(self.tile_width.value(), self.tile_height.value())
    }

    /// Commits text still being edited in the tile inputs. Text that only
    /// displays the stored value is left alone so the size is not rounded.
    pub fn commit_tile_inputs(&self) {
        for spin in [&self.tile_width, &self.tile_height] {
            if !shows_value(&spin.text(), spin.value(), spin.digits()) {
                spin.update();
            }
        }
    }

    /// Shows an imported tile size in the inputs.
    pub fn set_tile_config(&self, config: &TileConfig) {
        self.tile_width.set_value(config.tile_width);
        self.tile_height.set_value(config.tile_height);
    }
}

const TILE_DIGITS: u32 = 2;
const TILE_MAX_MM: f64 = 1.0e9;

fn tile_spin(value: f64) -> SpinButton {
    let adjustment = Adjustment::new(value.max(0.01), 0.01, TILE_MAX_MM, 1.0, 10.0, 0.0);
    let spin = SpinButton::new(Some(&adjustment), 1.0, TILE_DIGITS);
    spin.set_numeric(true);
    spin
}

/// True when `text` is just the rendering of `value` at `digits` decimals.
fn shows_value(text: &str, value: f64, digits: u32) -> bool {
    let half_step = 0.5 * 10f64.powi(-(digits as i32));
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map(|typed| (typed - value).abs() <= half_step)
        .unwrap_or(false)
}

/// `#rrggbb` for an RGBA color, alpha ignored.
pub fn rgba_to_hex(rgba: &RGBA) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(rgba.red()),
        channel(rgba.green()),
        channel(rgba.blue())
    )
}

pub fn parse_rgba(hex: &str) -> Option<RGBA> {
    let rgb: tilekit_layout::Rgb = hex.parse().ok()?;
    Some(RGBA::new(
        rgb.r as f32 / 255.0,
        rgb.g as f32 / 255.0,
        rgb.b as f32 / 255.0,
        1.0,
    ))
}
