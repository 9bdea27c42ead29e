//! Error types for the layout crate.
//!
//! Only import can fail in a way the user sees. Bad tile-size input is never
//! an error: it is replaced with a fallback value where it is used
//! (see [`crate::tiles::TileConfig::effective_width`]).

use std::io;
use thiserror::Error;

/// Errors produced while reading, writing or rasterizing a layout.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The layout text is not valid JSON or does not have the layout shape.
    #[error("Invalid layout file: {0}")]
    ImportParse(#[from] serde_json::Error),

    /// The layout file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A color string is not of the form `#rrggbb`.
    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    /// The raster surface could not be allocated.
    #[error("Cannot allocate a {width}x{height} surface")]
    Surface { width: u32, height: u32 },

    /// The rendered image could not be encoded.
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

impl LayoutError {
    /// True when the error came from the layout text rather than the file system.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ImportParse(_))
    }
}

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
