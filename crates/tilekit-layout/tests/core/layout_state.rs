use tilekit_layout::{Action, DrawCommand, LayoutState, Point, TileConfig};

fn drag(state: &mut LayoutState, from: (f64, f64), to: (f64, f64)) {
    state.pointer_down(Point::new(from.0, from.1));
    state.pointer_move(Point::new(to.0, to.1));
    state.pointer_up();
}

#[test]
fn test_sequential_commits_keep_order() {
    let mut state = LayoutState::new();
    state.set_object_name("First");
    drag(&mut state, (0.0, 0.0), (100.0, 100.0));
    state.set_object_name("Second");
    drag(&mut state, (200.0, 0.0), (250.0, 20.0));

    let lines = state.summary().to_lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("1. First"));
    assert!(lines[1].starts_with("2. Second"));

    let names: Vec<_> = state.shapes.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["First", "Second"]);
}

#[test]
fn test_later_shapes_painted_on_top() {
    let mut state = LayoutState::new();
    state.resize(300, 300);
    state.set_object_color("#0000ff");
    drag(&mut state, (0.0, 0.0), (100.0, 100.0));
    state.set_object_color("#00ff00");
    drag(&mut state, (50.0, 50.0), (150.0, 150.0));

    let fills: Vec<_> = state
        .render_commands()
        .into_iter()
        .filter_map(|c| match c {
            DrawCommand::FillRect { color, .. } => Some(color.to_hex()),
            _ => None,
        })
        .collect();
    assert_eq!(fills, ["#0000ff", "#00ff00"]);
}

#[test]
fn test_resize_preserves_shapes() {
    let mut state = LayoutState::new();
    state.resize(800, 600);
    drag(&mut state, (700.0, 500.0), (790.0, 590.0));
    state.resize(200, 200);
    assert_eq!(state.shapes.len(), 1);
    assert_eq!(state.shapes.get(0).map(|s| s.x), Some(700.0));
}

#[test]
fn test_recalculate_after_tile_change() {
    let mut state = LayoutState::new();
    drag(&mut state, (0.0, 0.0), (100.0, 100.0));
    assert_eq!(state.summary().lines[0].tiles, 1);

    state.set_tile_config(TileConfig::new(10.0, 10.0));
    assert_eq!(state.summary().lines[0].tiles, 100);
}

#[test]
fn test_leave_mid_drag_commits_nothing() {
    let mut state = LayoutState::new();
    state.pointer_down(Point::new(0.0, 0.0));
    state.pointer_move(Point::new(30.0, 30.0));
    assert_eq!(state.pointer_leave(), [Action::DragCancelled]);
    assert!(state.pointer_up().is_empty());
    assert!(state.shapes.is_empty());
    assert!(!state.is_modified);
}

#[test]
fn test_snapshot_image_matches_surface() {
    let mut state = LayoutState::new();
    state.resize(64, 48);
    drag(&mut state, (5.0, 5.0), (30.0, 30.0));
    let image = state.snapshot_image().unwrap();
    assert_eq!(image.dimensions(), (64, 48));
}

#[test]
fn test_recalculate_keeps_fractional_tile_size() {
    let mut state = LayoutState::new();
    state.apply_import(
        tilekit_layout::LayoutRecord::from_json(r#"{"tileWidth":12.5,"tileHeight":250000}"#)
            .unwrap(),
    );
    state.set_object_name("Strip");
    drag(&mut state, (0.0, 0.0), (25.0, 10.0));

    state.recalculate();
    assert_eq!(state.tile_config, TileConfig::new(12.5, 250000.0));
    assert_eq!(
        state.summary().to_lines(),
        ["1. Strip - Size: 25mm x 10mm, Tiles needed: 1"]
    );
}
