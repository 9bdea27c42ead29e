//! Surface rendering as a list of drawing commands.
//!
//! Rendering is a pure projection of the layout (shapes, preview, surface
//! size) onto [`DrawCommand`]s. Backends replay the list through
//! [`DrawTarget`]: the GTK canvas uses cairo, [`crate::raster`] uses
//! tiny-skia.
//!
//! Draw order: clear, grid, shapes in store order, then the drag preview.

use crate::model::{Point, RectExtent, Rgb, Shape};

/// Distance between grid lines (10 mm).
pub const GRID_STEP_MM: u32 = 10;
pub const GRID_LINE_WIDTH: f64 = 0.5;

pub const BORDER_WIDTH: f64 = 1.0;
pub const LABEL_FONT_SIZE: f64 = 12.0;
/// Label baseline relative to the shape's anchor corner.
pub const LABEL_OFFSET: Point = Point { x: 4.0, y: 14.0 };

pub const PREVIEW_LINE_WIDTH: f64 = 1.0;
/// Dash on/off lengths of the drag preview outline.
pub const PREVIEW_DASH: [f64; 2] = [5.0, 3.0];

/// Pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// One drawing primitive, in surface coordinates (y grows downward).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Reset the whole surface to the background.
    Clear { width: f64, height: f64 },
    Line {
        from: Point,
        to: Point,
        color: Rgb,
        width: f64,
    },
    /// Extents may be negative; backends normalize them.
    FillRect { rect: RectExtent, color: Rgb },
    StrokeRect {
        rect: RectExtent,
        color: Rgb,
        width: f64,
        dash: Option<[f64; 2]>,
    },
    /// Sans-serif text with its baseline starting at `origin`.
    Text {
        text: String,
        origin: Point,
        size: f64,
        color: Rgb,
    },
}

/// A backend that can replay drawing commands.
pub trait DrawTarget {
    fn draw(&mut self, command: &DrawCommand);
}

/// Replays `commands` on `target` in order.
pub fn replay<T: DrawTarget + ?Sized>(target: &mut T, commands: &[DrawCommand]) {
    for command in commands {
        target.draw(command);
    }
}

/// Clears the surface and draws the millimeter grid.
///
/// A surface with no area gets the clear and nothing else.
pub fn grid_commands(size: SurfaceSize) -> Vec<DrawCommand> {
    let width = size.width as f64;
    let height = size.height as f64;
    let mut commands = vec![DrawCommand::Clear { width, height }];
    if size.is_empty() {
        return commands;
    }

    let step = GRID_STEP_MM as usize;
    for x in (0..=size.width).step_by(step) {
        let x = x as f64;
        commands.push(grid_line(Point::new(x, 0.0), Point::new(x, height)));
    }
    for y in (0..=size.height).step_by(step) {
        let y = y as f64;
        commands.push(grid_line(Point::new(0.0, y), Point::new(width, y)));
    }
    commands
}

fn grid_line(from: Point, to: Point) -> DrawCommand {
    DrawCommand::Line {
        from,
        to,
        color: Rgb::GRID,
        width: GRID_LINE_WIDTH,
    }
}

/// Fill, border and label for each shape, in store order.
pub fn shape_commands<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    for shape in shapes {
        let rect = shape.extent();
        commands.push(DrawCommand::FillRect {
            rect,
            color: shape.rgb(),
        });
        commands.push(DrawCommand::StrokeRect {
            rect,
            color: Rgb::BLACK,
            width: BORDER_WIDTH,
            dash: None,
        });
        commands.push(DrawCommand::Text {
            text: shape.name.clone(),
            origin: Point::new(shape.x + LABEL_OFFSET.x, shape.y + LABEL_OFFSET.y),
            size: LABEL_FONT_SIZE,
            color: Rgb::BLACK,
        });
    }
    commands
}

/// Dashed outline of the rectangle being dragged.
pub fn preview_commands(rect: RectExtent, color: Rgb) -> Vec<DrawCommand> {
    vec![DrawCommand::StrokeRect {
        rect,
        color,
        width: PREVIEW_LINE_WIDTH,
        dash: Some(PREVIEW_DASH),
    }]
}

/// Everything visible on the surface for one frame.
pub fn render_scene<'a>(
    size: SurfaceSize,
    shapes: impl IntoIterator<Item = &'a Shape>,
    preview: Option<(RectExtent, Rgb)>,
) -> Vec<DrawCommand> {
    let mut commands = grid_commands(size);
    commands.extend(shape_commands(shapes));
    if let Some((rect, color)) = preview {
        commands.extend(preview_commands(rect, color));
    }
    commands
}
