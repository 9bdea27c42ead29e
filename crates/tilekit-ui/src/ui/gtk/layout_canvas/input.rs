//! Pointer input for the layout canvas

use super::*;
use gtk4::prelude::*;
use gtk4::{EventControllerMotion, GestureDrag};

impl LayoutCanvas {
    pub(super) fn connect_input(canvas: &Rc<Self>) {
        let drag_gesture = GestureDrag::new();
        drag_gesture.set_button(1); // Left click only

        let canvas_drag = canvas.clone();
        drag_gesture.connect_drag_begin(move |_gesture, x, y| {
            canvas_drag.handle_drag_begin(x, y);
        });

        let canvas_drag_update = canvas.clone();
        drag_gesture.connect_drag_update(move |_gesture, offset_x, offset_y| {
            canvas_drag_update.handle_drag_update(offset_x, offset_y);
        });

        let canvas_drag_end = canvas.clone();
        drag_gesture.connect_drag_end(move |_gesture, _offset_x, _offset_y| {
            canvas_drag_end.handle_drag_end();
        });

        let canvas_cancel = canvas.clone();
        drag_gesture.connect_cancel(move |_gesture, _sequence| {
            canvas_cancel.handle_leave();
        });
        canvas.widget.add_controller(drag_gesture);

        let motion_ctrl = EventControllerMotion::new();
        let canvas_leave = canvas.clone();
        motion_ctrl.connect_leave(move |_| {
            canvas_leave.handle_leave();
        });
        canvas.widget.add_controller(motion_ctrl);
    }

    fn handle_drag_begin(&self, x: f64, y: f64) {
        let origin = Point::new(x, y);
        self.drag_origin.set(origin);
        let actions = self.state.borrow_mut().pointer_down(origin);
        self.dispatch(actions);
    }

    /// GTK reports drag positions as offsets from the press point.
    fn handle_drag_update(&self, offset_x: f64, offset_y: f64) {
        let origin = self.drag_origin.get();
        let pos = Point::new(origin.x + offset_x, origin.y + offset_y);
        let actions = self.state.borrow_mut().pointer_move(pos);
        self.dispatch(actions);
    }

    fn handle_drag_end(&self) {
        let actions = self.state.borrow_mut().pointer_up();
        self.dispatch(actions);
    }

    fn handle_leave(&self) {
        let actions = self.state.borrow_mut().pointer_leave();
        self.dispatch(actions);
    }
}
