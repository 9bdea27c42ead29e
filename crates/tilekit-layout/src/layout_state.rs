//! Application state for the layout editor.
//!
//! `LayoutState` owns everything the editor knows: committed shapes, the
//! tile configuration, the drag controller, the surface size and the
//! current name/color inputs. The UI holds it in an `Rc<RefCell<_>>`,
//! forwards input to it and redraws from [`LayoutState::render_commands`].

use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::{info, warn};

use crate::error::Result;
use crate::interaction::{Action, InteractionController, ShapeStyle};
use crate::model::{Point, Rgb, DEFAULT_COLOR};
use crate::raster;
use crate::renderer::{render_scene, DrawCommand, SurfaceSize};
use crate::serialization::LayoutRecord;
use crate::shape_store::ShapeStore;
use crate::tiles::{TileConfig, TileSummary};

#[derive(Debug, Clone)]
pub struct LayoutState {
    pub shapes: ShapeStore,
    pub tile_config: TileConfig,
    pub controller: InteractionController,
    pub surface: SurfaceSize,
    /// Name given to the next committed shape.
    pub object_name: String,
    /// Color given to the next committed shape, as `#rrggbb`.
    pub object_color: String,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    summary: TileSummary,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    pub fn new() -> Self {
        Self {
            shapes: ShapeStore::new(),
            tile_config: TileConfig::default(),
            controller: InteractionController::new(),
            surface: SurfaceSize::default(),
            object_name: String::new(),
            object_color: DEFAULT_COLOR.to_string(),
            current_file_path: None,
            is_modified: false,
            summary: TileSummary::default(),
        }
    }

    pub fn with_tile_config(tile_config: TileConfig) -> Self {
        Self {
            tile_config,
            ..Self::new()
        }
    }

    pub fn set_object_name(&mut self, name: impl Into<String>) {
        self.object_name = name.into();
    }

    pub fn set_object_color(&mut self, color: impl Into<String>) {
        self.object_color = color.into();
    }

    /// Updates the tile size and rebuilds the summary.
    pub fn set_tile_config(&mut self, config: TileConfig) {
        self.tile_config = config;
        self.recalculate();
    }

    /// Updates the tile size from the raw text of the two size fields.
    pub fn set_tile_inputs(&mut self, width: &str, height: &str) {
        self.set_tile_config(TileConfig::from_inputs(width, height));
    }

    /// Records a new surface size. Shapes keep their absolute coordinates.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface = SurfaceSize::new(width, height);
    }

    pub fn pointer_down(&mut self, pos: Point) -> Vec<Action> {
        let actions = self.controller.pointer_down(pos);
        self.apply(actions)
    }

    pub fn pointer_move(&mut self, pos: Point) -> Vec<Action> {
        let actions = self.controller.pointer_move(pos);
        self.apply(actions)
    }

    pub fn pointer_up(&mut self) -> Vec<Action> {
        let actions = self.controller.pointer_up(ShapeStyle {
            name: &self.object_name,
            color: &self.object_color,
        });
        self.apply(actions)
    }

    pub fn pointer_leave(&mut self) -> Vec<Action> {
        let actions = self.controller.pointer_leave();
        self.apply(actions)
    }

    fn apply(&mut self, actions: Vec<Action>) -> Vec<Action> {
        for action in &actions {
            if let Action::ShapeCommitted(shape) = action {
                info!(
                    "Committed '{}' {}x{} at ({}, {})",
                    shape.display_name(),
                    shape.w,
                    shape.h,
                    shape.x,
                    shape.y
                );
                self.shapes.push(shape.clone());
                self.is_modified = true;
                self.recalculate();
            }
        }
        actions
    }

    /// Rebuilds the tile summary from scratch.
    pub fn recalculate(&mut self) -> &TileSummary {
        self.summary = TileSummary::build(&self.shapes, &self.tile_config);
        &self.summary
    }

    pub fn summary(&self) -> &TileSummary {
        &self.summary
    }

    /// Color of the drag preview: the current color input, or red.
    pub fn preview_color(&self) -> Rgb {
        self.object_color.parse().unwrap_or(Rgb::RED)
    }

    /// Drawing commands for the current frame.
    pub fn render_commands(&self) -> Vec<DrawCommand> {
        let preview = self
            .controller
            .preview()
            .map(|rect| (rect, self.preview_color()));
        render_scene(self.surface, &self.shapes, preview)
    }

    /// Rasterizes the current frame.
    pub fn snapshot_image(&self) -> Result<RgbImage> {
        raster::render_to_image(&self.render_commands(), self.surface)
    }

    pub fn export_record(&self) -> LayoutRecord {
        LayoutRecord::new(&self.shapes, &self.tile_config)
    }

    /// Writes the layout to `path`.
    pub fn export_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.export_record().save_to_file(&path)?;
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Replaces the whole layout with an imported record.
    pub fn apply_import(&mut self, record: LayoutRecord) {
        self.tile_config = record.tile_config();
        self.shapes.replace_all(record.objects);
        self.is_modified = false;
        self.recalculate();
        info!(
            "Imported {} objects, tile {}x{}",
            self.shapes.len(),
            self.tile_config.tile_width,
            self.tile_config.tile_height
        );
    }

    /// Applies the outcome of an import read. On error nothing changes.
    pub fn finish_import(&mut self, result: Result<LayoutRecord>) -> Result<()> {
        match result {
            Ok(record) => {
                self.apply_import(record);
                Ok(())
            }
            Err(e) => {
                warn!("Import failed, layout unchanged: {}", e);
                Err(e)
            }
        }
    }

    /// Like [`finish_import`](Self::finish_import), remembering `path` on success.
    pub fn finish_import_from(&mut self, path: &Path, result: Result<LayoutRecord>) -> Result<()> {
        self.finish_import(result)?;
        self.current_file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Reads `path` and replaces the layout with its contents.
    pub async fn import_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let result = LayoutRecord::load_from_file(path).await;
        self.finish_import_from(path, result)
    }

    /// Starts an empty layout. The tile configuration is kept.
    pub fn new_layout(&mut self) {
        self.shapes.clear();
        self.controller = InteractionController::new();
        self.current_file_path = None;
        self.is_modified = false;
        self.recalculate();
    }

    /// Title for the window: file name (or "Untitled") plus `*` when modified.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled");

        if self.is_modified {
            format!("{}*", name)
        } else {
            name.to_string()
        }
    }
}
