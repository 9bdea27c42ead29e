use serde::{Deserialize, Serialize};

use super::{Rgb, RectExtent};

/// Name given to a shape committed with an empty name field.
pub const DEFAULT_NAME: &str = "Object";

/// Color given to a shape committed with an empty or unparsable color.
pub const DEFAULT_COLOR: &str = "#ff0000";

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// A placed rectangle: what the user drew, plus its label and fill color.
///
/// Shapes are never edited after they are committed; the store only appends
/// to or replaces its whole sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Shape {
    pub fn new(name: impl Into<String>, color: impl Into<String>, rect: RectExtent) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
        }
    }

    /// Builds a shape from a finished drag, applying the name and color defaults.
    pub fn from_drag(rect: RectExtent, name: &str, color: &str) -> Self {
        let name = if name.is_empty() { DEFAULT_NAME } else { name };
        let color = match color.parse::<Rgb>() {
            Ok(rgb) => rgb.to_hex(),
            Err(_) => DEFAULT_COLOR.to_string(),
        };
        Self::new(name, color, rect)
    }

    pub fn extent(&self) -> RectExtent {
        RectExtent::new(self.x, self.y, self.w, self.h)
    }

    pub fn area(&self) -> f64 {
        self.extent().area()
    }

    /// Fill color; a malformed stored color paints as the default red.
    pub fn rgb(&self) -> Rgb {
        self.color.parse().unwrap_or(Rgb::RED)
    }

    /// Name shown in the summary list.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            DEFAULT_NAME
        } else {
            &self.name
        }
    }
}
