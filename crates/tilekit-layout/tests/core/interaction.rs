use tilekit_layout::{
    compute_tiles, Action, DragState, InteractionController, Point, RectExtent, Shape, ShapeStyle,
    TileConfig,
};

const STYLE: ShapeStyle<'static> = ShapeStyle {
    name: "",
    color: "#ff7f50",
};

fn committed(actions: Vec<Action>) -> Shape {
    match actions.into_iter().next() {
        Some(Action::ShapeCommitted(shape)) => shape,
        other => panic!("expected a commit, got {other:?}"),
    }
}

#[test]
fn test_forward_drag_scenario() {
    let mut ctl = InteractionController::new();
    ctl.pointer_down(Point::new(10.0, 10.0));
    ctl.pointer_move(Point::new(110.0, 60.0));
    let shape = committed(ctl.pointer_up(STYLE));

    assert_eq!(shape.extent(), RectExtent::new(10.0, 10.0, 100.0, 50.0));
    assert_eq!(shape.area(), 5000.0);
    assert_eq!(compute_tiles(&shape, &TileConfig::new(100.0, 100.0)), 1);
}

#[test]
fn test_backward_drag_scenario() {
    let mut ctl = InteractionController::new();
    ctl.pointer_down(Point::new(50.0, 50.0));
    ctl.pointer_move(Point::new(10.0, 10.0));
    let shape = committed(ctl.pointer_up(STYLE));

    assert_eq!(shape.extent(), RectExtent::new(50.0, 50.0, -40.0, -40.0));
    assert_eq!(shape.area(), 1600.0);
    assert_eq!(compute_tiles(&shape, &TileConfig::new(10.0, 10.0)), 16);
}

#[test]
fn test_every_move_requests_redraw() {
    let mut ctl = InteractionController::new();
    ctl.pointer_down(Point::new(0.0, 0.0));
    for i in 1..5 {
        let pos = Point::new(i as f64, i as f64 * 2.0);
        assert_eq!(ctl.pointer_move(pos), [Action::RenderNeeded]);
    }
    match ctl.state() {
        DragState::Dragging { start, preview } => {
            assert_eq!(start, Point::new(0.0, 0.0));
            assert_eq!(preview, RectExtent::new(0.0, 0.0, 4.0, 8.0));
        }
        DragState::Idle => panic!("drag ended early"),
    }
}

#[test]
fn test_committed_shape_uses_style() {
    let mut ctl = InteractionController::new();
    ctl.pointer_down(Point::new(1.0, 1.0));
    ctl.pointer_move(Point::new(2.0, 2.0));
    let shape = committed(ctl.pointer_up(ShapeStyle {
        name: "Porch",
        color: "#123456",
    }));
    assert_eq!(shape.name, "Porch");
    assert_eq!(shape.color, "#123456");
}
