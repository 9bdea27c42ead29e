//! Tile coverage calculation.
//!
//! Every shape needs `ceil(|w| * |h| / (tile_width * tile_height))` whole
//! tiles. The summary is always rebuilt from scratch; layouts are small.

use std::fmt;

use crate::model::Shape;
use crate::shape_store::ShapeStore;

/// Tile size used when nothing else is configured or imported.
pub const DEFAULT_TILE_SIZE_MM: f64 = 100.0;

/// Tile size substituted for non-positive or non-numeric input.
pub const FALLBACK_TILE_SIZE_MM: f64 = 1.0;

/// Configured tile dimensions in millimeters.
///
/// Values are stored as entered; [`effective_width`](Self::effective_width)
/// and [`effective_height`](Self::effective_height) apply the fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileConfig {
    pub tile_width: f64,
    pub tile_height: f64,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_SIZE_MM,
            tile_height: DEFAULT_TILE_SIZE_MM,
        }
    }
}

impl TileConfig {
    pub fn new(tile_width: f64, tile_height: f64) -> Self {
        Self {
            tile_width,
            tile_height,
        }
    }

    /// Builds a configuration from the text of the two size fields.
    pub fn from_inputs(width: &str, height: &str) -> Self {
        Self::new(parse_dimension(width), parse_dimension(height))
    }

    pub fn effective_width(&self) -> f64 {
        sanitize(self.tile_width)
    }

    pub fn effective_height(&self) -> f64 {
        sanitize(self.tile_height)
    }

    /// Area of one tile after the fallback is applied. Always positive.
    pub fn tile_area(&self) -> f64 {
        self.effective_width() * self.effective_height()
    }

    /// Copy with the fallback baked in, as written to exported layouts.
    pub fn effective(&self) -> Self {
        Self::new(self.effective_width(), self.effective_height())
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        FALLBACK_TILE_SIZE_MM
    }
}

/// Parses a tile-size field. Empty or non-numeric text becomes the fallback.
pub fn parse_dimension(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .map(sanitize)
        .unwrap_or(FALLBACK_TILE_SIZE_MM)
}

/// Whole tiles needed to cover `shape`. Zero area needs zero tiles.
pub fn compute_tiles(shape: &Shape, config: &TileConfig) -> u64 {
    let tiles = (shape.area() / config.tile_area()).ceil();
    // Saturating float-to-int cast; NaN becomes 0.
    tiles as u64
}

/// Rounds to the nearest integer with halves going toward positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    let rounded = value.round();
    if value < 0.0 && rounded - value == -0.5 {
        (rounded + 1.0) as i64
    } else {
        rounded as i64
    }
}

/// One row of the tile summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    /// 1-based position in the store.
    pub index: usize,
    pub name: String,
    pub width_mm: i64,
    pub height_mm: i64,
    pub tiles: u64,
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} - Size: {}mm x {}mm, Tiles needed: {}",
            self.index, self.name, self.width_mm, self.height_mm, self.tiles
        )
    }
}

/// Tile counts for every shape in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileSummary {
    pub lines: Vec<SummaryLine>,
}

impl TileSummary {
    pub fn build(store: &ShapeStore, config: &TileConfig) -> Self {
        let lines = store
            .iter()
            .enumerate()
            .map(|(i, shape)| SummaryLine {
                index: i + 1,
                name: shape.display_name().to_string(),
                width_mm: round_half_up(shape.w),
                height_mm: round_half_up(shape.h),
                tiles: compute_tiles(shape, config),
            })
            .collect();
        Self { lines }
    }

    pub fn total_tiles(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.tiles))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }
}
