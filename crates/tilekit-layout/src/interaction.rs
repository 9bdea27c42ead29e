//! Pointer state machine that turns a drag into a new shape.
//!
//! ```text
//!   Idle --pointer_down--> Dragging --pointer_move--> Dragging
//!     ^                       |
//!     +------pointer_up-------+  (commits a Shape)
//!     +------pointer_leave----+  (discards the preview)
//! ```
//!
//! The controller never touches the shape store itself. It returns
//! [`Action`]s and the owner (see [`crate::layout_state::LayoutState`])
//! applies them, so the machine can be driven in tests without a window.

use tracing::debug;

use crate::model::{Point, RectExtent, Shape};

/// What the host must do after an input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The preview changed; redraw the surface.
    RenderNeeded,
    /// A drag finished; append the shape, rebuild the summary and redraw.
    ShapeCommitted(Shape),
    /// A drag was abandoned; redraw without the preview.
    DragCancelled,
}

/// Interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        start: Point,
        preview: RectExtent,
    },
}

/// Current authoring inputs applied to a committed shape.
#[derive(Debug, Clone, Copy)]
pub struct ShapeStyle<'a> {
    pub name: &'a str,
    pub color: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: DragState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The uncommitted rectangle, while a drag is in progress.
    pub fn preview(&self) -> Option<RectExtent> {
        match self.state {
            DragState::Dragging { preview, .. } => Some(preview),
            DragState::Idle => None,
        }
    }

    /// Starts a drag at `pos`. A second press mid-drag restarts from `pos`.
    pub fn pointer_down(&mut self, pos: Point) -> Vec<Action> {
        debug!(x = pos.x, y = pos.y, "drag started");
        self.state = DragState::Dragging {
            start: pos,
            preview: RectExtent::at(pos),
        };
        vec![Action::RenderNeeded]
    }

    /// Stretches the preview to `pos`. Ignored while idle.
    pub fn pointer_move(&mut self, pos: Point) -> Vec<Action> {
        match &mut self.state {
            DragState::Idle => Vec::new(),
            DragState::Dragging { start, preview } => {
                preview.w = pos.x - start.x;
                preview.h = pos.y - start.y;
                vec![Action::RenderNeeded]
            }
        }
    }

    /// Finishes the drag and produces the committed shape. Ignored while idle.
    ///
    /// The release position is not used: the last move already set the extent.
    pub fn pointer_up(&mut self, style: ShapeStyle<'_>) -> Vec<Action> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => Vec::new(),
            DragState::Dragging { preview, .. } => {
                let shape = Shape::from_drag(preview, style.name, style.color);
                debug!(
                    x = shape.x,
                    y = shape.y,
                    w = shape.w,
                    h = shape.h,
                    "drag committed"
                );
                vec![Action::ShapeCommitted(shape)]
            }
        }
    }

    /// Pointer left the surface without a release: the drag is dropped.
    pub fn pointer_leave(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => Vec::new(),
            DragState::Dragging { .. } => {
                debug!("drag cancelled, pointer left surface");
                vec![Action::DragCancelled]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: ShapeStyle<'static> = ShapeStyle {
        name: "Hall",
        color: "#336699",
    };

    #[test]
    fn test_idle_ignores_move_and_up() {
        let mut ctl = InteractionController::new();
        assert!(ctl.pointer_move(Point::new(5.0, 5.0)).is_empty());
        assert!(ctl.pointer_up(STYLE).is_empty());
        assert!(ctl.pointer_leave().is_empty());
        assert_eq!(ctl.state(), DragState::Idle);
    }

    #[test]
    fn test_down_starts_zero_preview() {
        let mut ctl = InteractionController::new();
        assert_eq!(ctl.pointer_down(Point::new(10.0, 20.0)), [Action::RenderNeeded]);
        assert_eq!(ctl.preview(), Some(RectExtent::new(10.0, 20.0, 0.0, 0.0)));
    }

    #[test]
    fn test_move_updates_extent() {
        let mut ctl = InteractionController::new();
        ctl.pointer_down(Point::new(10.0, 10.0));
        ctl.pointer_move(Point::new(40.0, 30.0));
        ctl.pointer_move(Point::new(110.0, 60.0));
        assert_eq!(ctl.preview(), Some(RectExtent::new(10.0, 10.0, 100.0, 50.0)));
    }

    #[test]
    fn test_up_commits_and_returns_to_idle() {
        let mut ctl = InteractionController::new();
        ctl.pointer_down(Point::new(50.0, 50.0));
        ctl.pointer_move(Point::new(10.0, 10.0));
        let actions = ctl.pointer_up(STYLE);
        let expected = Shape::new("Hall", "#336699", RectExtent::new(50.0, 50.0, -40.0, -40.0));
        assert_eq!(actions, [Action::ShapeCommitted(expected)]);
        assert!(!ctl.is_dragging());
        assert_eq!(ctl.preview(), None);
    }

    #[test]
    fn test_click_without_move_commits_empty_shape() {
        let mut ctl = InteractionController::new();
        ctl.pointer_down(Point::new(3.0, 4.0));
        let actions = ctl.pointer_up(ShapeStyle { name: "", color: "" });
        match actions.as_slice() {
            [Action::ShapeCommitted(shape)] => {
                assert_eq!(shape.area(), 0.0);
                assert_eq!(shape.name, "Object");
                assert_eq!(shape.color, "#ff0000");
            }
            other => panic!("unexpected actions {other:?}"),
        }
    }

    #[test]
    fn test_leave_cancels_drag() {
        let mut ctl = InteractionController::new();
        ctl.pointer_down(Point::new(0.0, 0.0));
        ctl.pointer_move(Point::new(20.0, 20.0));
        assert_eq!(ctl.pointer_leave(), [Action::DragCancelled]);
        assert!(ctl.pointer_up(STYLE).is_empty());
    }

    #[test]
    fn test_second_down_restarts() {
        let mut ctl = InteractionController::new();
        ctl.pointer_down(Point::new(0.0, 0.0));
        ctl.pointer_move(Point::new(20.0, 20.0));
        ctl.pointer_down(Point::new(5.0, 5.0));
        assert_eq!(ctl.preview(), Some(RectExtent::new(5.0, 5.0, 0.0, 0.0)));
    }
}
