//! Raster backend: replays drawing commands into an image with tiny-skia.
//!
//! Used for PNG snapshots of the layout and for checking rendered output in
//! tests. Labels are drawn with the system sans-serif font when one exists.

use std::path::Path;

use image::RgbImage;
use rusttype::{point as rt_point, Scale};
use tiny_skia::{
    Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, StrokeDash, Transform,
};
use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::font_manager;
use crate::model::{RectExtent, Rgb};
use crate::renderer::{replay, DrawCommand, DrawTarget, SurfaceSize};

fn bg_color() -> Color {
    Color::WHITE
}

fn paint_for(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = true;
    paint
}

fn skia_rect(rect: &RectExtent) -> Option<Rect> {
    let (left, top, width, height) = rect.normalized();
    Rect::from_xywh(left as f32, top as f32, width as f32, height as f32)
}

/// tiny-skia pixmap that implements [`DrawTarget`].
pub struct RasterTarget {
    pixmap: Pixmap,
}

impl RasterTarget {
    pub fn new(size: SurfaceSize) -> Result<Self> {
        let pixmap = Pixmap::new(size.width, size.height).ok_or(LayoutError::Surface {
            width: size.width,
            height: size.height,
        })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Color at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgb::new(p.red(), p.green(), p.blue()))
    }

    /// Flattens the pixmap into an opaque RGB image.
    pub fn into_image(self) -> RgbImage {
        let width = self.pixmap.width();
        let height = self.pixmap.height();
        let data = self.pixmap.data();
        RgbImage::from_fn(width, height, |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            image::Rgb([data[idx], data[idx + 1], data[idx + 2]])
        })
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, size: f64, color: Rgb) {
        if text.is_empty() {
            return;
        }
        let Some(font) = font_manager::sans_serif() else {
            debug!("Skipping label {:?}, no font", text);
            return;
        };

        let width = self.pixmap.width() as i32;
        let height = self.pixmap.height() as i32;
        let stride = self.pixmap.width() as usize;
        let data = self.pixmap.data_mut();
        let scale = Scale::uniform(size as f32);
        let start = rt_point(x as f32, y as f32);

        for glyph in font.layout(text, scale, start) {
            let Some(bounding_box) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bounding_box.min.x;
                let py = gy as i32 + bounding_box.min.y;
                if px < 0 || px >= width || py < 0 || py >= height || coverage <= 0.0 {
                    return;
                }
                let idx = (py as usize * stride + px as usize) * 4;
                let pixel = &mut data[idx..idx + 4];
                let blend = |dst: u8, src: u8| {
                    (dst as f32 * (1.0 - coverage) + src as f32 * coverage).round() as u8
                };
                // Surface is opaque, so premultiplied and straight values match.
                pixel[0] = blend(pixel[0], color.r);
                pixel[1] = blend(pixel[1], color.g);
                pixel[2] = blend(pixel[2], color.b);
                pixel[3] = 255;
            });
        }
    }
}

impl DrawTarget for RasterTarget {
    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear { .. } => self.pixmap.fill(bg_color()),
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => {
                let mut pb = PathBuilder::new();
                pb.move_to(from.x as f32, from.y as f32);
                pb.line_to(to.x as f32, to.y as f32);
                if let Some(path) = pb.finish() {
                    let stroke = Stroke {
                        width: *width as f32,
                        ..Default::default()
                    };
                    self.pixmap.stroke_path(
                        &path,
                        &paint_for(*color),
                        &stroke,
                        Transform::identity(),
                        None,
                    );
                }
            }
            DrawCommand::FillRect { rect, color } => {
                if let Some(r) = skia_rect(rect) {
                    let path = PathBuilder::from_rect(r);
                    self.pixmap.fill_path(
                        &path,
                        &paint_for(*color),
                        FillRule::Winding,
                        Transform::identity(),
                        None,
                    );
                }
            }
            DrawCommand::StrokeRect {
                rect,
                color,
                width,
                dash,
            } => {
                if let Some(r) = skia_rect(rect) {
                    let path = PathBuilder::from_rect(r);
                    let stroke = Stroke {
                        width: *width as f32,
                        dash: dash.and_then(|[on, off]| {
                            StrokeDash::new(vec![on as f32, off as f32], 0.0)
                        }),
                        ..Default::default()
                    };
                    self.pixmap.stroke_path(
                        &path,
                        &paint_for(*color),
                        &stroke,
                        Transform::identity(),
                        None,
                    );
                }
            }
            DrawCommand::Text {
                text,
                origin,
                size,
                color,
            } => self.draw_text(text, origin.x, origin.y, *size, *color),
        }
    }
}

/// Rasterizes a command list onto a fresh surface of `size`.
pub fn render_to_image(commands: &[DrawCommand], size: SurfaceSize) -> Result<RgbImage> {
    let mut target = RasterTarget::new(size)?;
    replay(&mut target, commands);
    Ok(target.into_image())
}

/// Writes `image` as PNG.
pub fn save_png(image: &RgbImage, path: impl AsRef<Path>) -> Result<()> {
    image.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
    Ok(())
}
