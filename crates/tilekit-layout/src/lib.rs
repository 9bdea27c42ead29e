//! # TileKit Layout
//!
//! Model and logic behind the tile layout editor: rectangles drawn on a
//! millimeter grid (1 px = 1 mm), the number of fixed-size tiles each one
//! needs, and the JSON file the layout is exchanged in.
//!
//! ## Architecture
//!
//! ```text
//! LayoutState (owned application state)
//!   ├── InteractionController (Idle / Dragging)  --commit-->  ShapeStore
//!   ├── TileConfig ──> TileSummary (rebuilt on commit, recalc, import)
//!   ├── renderer (grid + shapes + preview -> DrawCommand list)
//!   │     └── raster (tiny-skia backend, PNG snapshots)
//!   └── serialization (LayoutRecord <-> JSON, async import)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tilekit_layout::{LayoutState, Point, TileConfig};
//!
//! let mut state = LayoutState::with_tile_config(TileConfig::new(10.0, 10.0));
//! state.pointer_down(Point::new(50.0, 50.0));
//! state.pointer_move(Point::new(10.0, 10.0));
//! state.pointer_up();
//!
//! assert_eq!(state.summary().lines[0].tiles, 16);
//! ```

pub mod error;
pub mod font_manager;
pub mod interaction;
pub mod layout_state;
pub mod model;
pub mod raster;
pub mod renderer;
pub mod serialization;
pub mod shape_store;
pub mod tiles;

pub use error::{LayoutError, Result};
pub use interaction::{Action, DragState, InteractionController, ShapeStyle};
pub use layout_state::LayoutState;
pub use model::{Point, RectExtent, Rgb, Shape, DEFAULT_COLOR, DEFAULT_NAME};
pub use raster::{render_to_image, save_png, RasterTarget};
pub use renderer::{render_scene, replay, DrawCommand, DrawTarget, SurfaceSize, GRID_STEP_MM};
pub use serialization::{read_layout, LayoutRecord, EXPORT_FILE_NAME};
pub use shape_store::ShapeStore;
pub use tiles::{compute_tiles, SummaryLine, TileConfig, TileSummary};
