//! Layout Canvas - drawing area and pointer handling for the layout editor
//!
//! The widget owns no drawing logic of its own: every frame is the command
//! list produced by [`LayoutState::render_commands`], replayed on cairo.

mod input;
mod rendering;

use gtk4::prelude::*;
use gtk4::DrawingArea;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tilekit_layout::{replay, Action, LayoutState, Point, Shape};
use tracing::debug;

pub use rendering::CairoTarget;

type CommitHandler = Box<dyn Fn(&Shape)>;

pub struct LayoutCanvas {
    pub widget: DrawingArea,
    pub(crate) state: Rc<RefCell<LayoutState>>,
    drag_origin: Cell<Point>,
    on_commit: RefCell<Option<CommitHandler>>,
}

impl LayoutCanvas {
    pub fn new(state: Rc<RefCell<LayoutState>>) -> Rc<Self> {
        let widget = DrawingArea::builder()
            .hexpand(true)
            .vexpand(true)
            .content_width(800)
            .content_height(500)
            .css_classes(vec!["layout-canvas"])
            .build();

        let state_draw = state.clone();
        widget.set_draw_func(move |_area, cr, _width, _height| {
            let commands = match state_draw.try_borrow() {
                Ok(state) => state.render_commands(),
                Err(_) => return,
            };
            replay(&mut CairoTarget::new(cr), &commands);
        });

        let state_resize = state.clone();
        widget.connect_resize(move |area, width, height| {
            debug!("Canvas resized to {}x{}", width, height);
            state_resize
                .borrow_mut()
                .resize(width.max(0) as u32, height.max(0) as u32);
            area.queue_draw();
        });

        let canvas = Rc::new(Self {
            widget,
            state,
            drag_origin: Cell::new(Point::default()),
            on_commit: RefCell::new(None),
        });

        Self::connect_input(&canvas);
        canvas
    }

    /// Register the callback run after a shape is committed.
    pub fn connect_commit<F: Fn(&Shape) + 'static>(&self, f: F) {
        *self.on_commit.borrow_mut() = Some(Box::new(f));
    }

    pub fn refresh(&self) {
        self.widget.queue_draw();
    }

    /// Reacts to the actions returned by the layout state. The state must
    /// not be borrowed while this runs.
    fn dispatch(&self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::RenderNeeded | Action::DragCancelled => self.widget.queue_draw(),
                Action::ShapeCommitted(shape) => {
                    self.widget.queue_draw();
                    if let Some(handler) = self.on_commit.borrow().as_ref() {
                        handler(&shape);
                    }
                }
            }
        }
    }
}
