//! Cairo backend for the layout draw commands

use gtk4::cairo::{self, Context, FontSlant, FontWeight};
use tilekit_layout::{DrawCommand, DrawTarget, Rgb};
use tracing::warn;

/// Replays draw commands on a cairo context.
pub struct CairoTarget<'a> {
    cr: &'a Context,
}

impl<'a> CairoTarget<'a> {
    pub fn new(cr: &'a Context) -> Self {
        Self { cr }
    }

    fn set_color(&self, color: Rgb) {
        let (r, g, b) = color.to_unit();
        self.cr.set_source_rgb(r, g, b);
    }

    fn check(op: &str, result: Result<(), cairo::Error>) {
        if let Err(e) = result {
            warn!("Cairo {} failed: {}", op, e);
        }
    }
}

impl DrawTarget for CairoTarget<'_> {
    fn draw(&mut self, command: &DrawCommand) {
        let cr = self.cr;
        match command {
            DrawCommand::Clear { width, height } => {
                cr.set_source_rgb(1.0, 1.0, 1.0);
                cr.rectangle(0.0, 0.0, *width, *height);
                Self::check("clear", cr.fill());
            }
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => {
                self.set_color(*color);
                cr.set_line_width(*width);
                cr.move_to(from.x, from.y);
                cr.line_to(to.x, to.y);
                Self::check("line", cr.stroke());
            }
            DrawCommand::FillRect { rect, color } => {
                let (x, y, w, h) = rect.normalized();
                self.set_color(*color);
                cr.rectangle(x, y, w, h);
                Self::check("fill", cr.fill());
            }
            DrawCommand::StrokeRect {
                rect,
                color,
                width,
                dash,
            } => {
                let (x, y, w, h) = rect.normalized();
                self.set_color(*color);
                cr.set_line_width(*width);
                match dash {
                    Some(pattern) => cr.set_dash(pattern, 0.0),
                    None => cr.set_dash(&[], 0.0),
                }
                cr.rectangle(x, y, w, h);
                Self::check("stroke", cr.stroke());
                cr.set_dash(&[], 0.0);
            }
            DrawCommand::Text {
                text,
                origin,
                size,
                color,
            } => {
                if text.is_empty() {
                    return;
                }
                self.set_color(*color);
                cr.select_font_face("Sans", FontSlant::Normal, FontWeight::Normal);
                cr.set_font_size(*size);
                cr.move_to(origin.x, origin.y);
                Self::check("text", cr.show_text(text));
            }
        }
    }
}
