//! Layout model: points, drag rectangles and placed shapes.

use serde::{Deserialize, Serialize};

mod color;
mod shape;

pub use color::Rgb;
pub use shape::{Shape, DEFAULT_COLOR, DEFAULT_NAME};

/// A position on the drawing surface, in millimeters (1 px = 1 mm).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at a corner.
///
/// `w` and `h` keep their sign: a drag up and to the left produces negative
/// extents, and `(x, y)` stays the corner where the drag started.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectExtent {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectExtent {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Zero-sized rectangle at `origin`.
    pub fn at(origin: Point) -> Self {
        Self::new(origin.x, origin.y, 0.0, 0.0)
    }

    /// Area in square millimeters, ignoring drag direction.
    pub fn area(&self) -> f64 {
        self.w.abs() * self.h.abs()
    }

    /// Same rectangle with non-negative extents, as `(left, top, width, height)`.
    pub fn normalized(&self) -> (f64, f64, f64, f64) {
        let left = if self.w < 0.0 { self.x + self.w } else { self.x };
        let top = if self.h < 0.0 { self.y + self.h } else { self.y };
        (left, top, self.w.abs(), self.h.abs())
    }
}
