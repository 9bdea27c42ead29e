use proptest::prelude::*;
use std::io::Write;
use tilekit_layout::{
    read_layout, LayoutRecord, LayoutState, Point, RectExtent, Rgb, Shape, ShapeStore, TileConfig,
};

fn sample_state() -> LayoutState {
    let mut state = LayoutState::with_tile_config(TileConfig::new(30.0, 60.0));
    state.set_object_name("Hall");
    state.set_object_color("#ff7f50");
    state.pointer_down(Point::new(10.0, 10.0));
    state.pointer_move(Point::new(110.0, 60.0));
    state.pointer_up();
    state.set_object_name("Utility");
    state.pointer_down(Point::new(50.0, 50.0));
    state.pointer_move(Point::new(10.0, 10.0));
    state.pointer_up();
    state
}

#[test]
fn test_export_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("layout.json");

    let mut state = sample_state();
    state.export_to_file(&path).expect("export failed");
    assert!(!state.is_modified);

    let text = std::fs::read_to_string(&path).unwrap();
    let loaded = LayoutRecord::from_json(&text).unwrap();
    assert_eq!(loaded, state.export_record());
}

#[tokio::test]
async fn test_import_file_replaces_layout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("incoming.json");
    std::fs::write(
        &path,
        r##"{"objects":[{"name":"Deck","color":"#00ff00","x":0,"y":0,"w":200,"h":100}],"tileHeight":50}"##,
    )
    .unwrap();

    let mut state = sample_state();
    state.import_file(&path).await.expect("import failed");

    assert_eq!(state.shapes.len(), 1);
    assert_eq!(state.shapes.get(0).map(|s| s.name.as_str()), Some("Deck"));
    assert_eq!(state.tile_config, TileConfig::new(100.0, 50.0));
    assert_eq!(
        state.summary().to_lines(),
        ["1. Deck - Size: 200mm x 100mm, Tiles needed: 4"]
    );
    assert_eq!(state.display_name(), "incoming.json");
}

#[tokio::test]
async fn test_invalid_import_leaves_state_unchanged() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    write!(file, "{{\"objects\": [").unwrap();

    let mut state = sample_state();
    let shapes_before = state.shapes.clone();
    let config_before = state.tile_config;
    let json_before = state.export_record().to_json().unwrap();

    let err = state.import_file(file.path()).await.unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(state.shapes, shapes_before);
    assert_eq!(state.tile_config, config_before);
    assert_eq!(state.export_record().to_json().unwrap(), json_before);
}

#[tokio::test]
async fn test_array_import_leaves_state_unchanged() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("array.json");
    std::fs::write(&path, "[null, 7, 9]").unwrap();

    let mut state = sample_state();
    let shapes_before = state.shapes.clone();

    let err = state.import_file(&path).await.unwrap_err();
    assert!(err.is_parse_error());
    assert_eq!(state.shapes, shapes_before);
    assert_eq!(state.tile_config, TileConfig::new(30.0, 60.0));
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut state = sample_state();
    let err = state
        .import_file(dir.path().join("nope.json"))
        .await
        .unwrap_err();
    assert!(!err.is_parse_error());
    assert_eq!(state.shapes.len(), 2);
}

#[tokio::test]
async fn test_read_layout_from_reader() {
    let bytes: &[u8] = br#"{"objects":[]}"#;
    let record = read_layout(bytes).await.unwrap();
    assert!(record.objects.is_empty());
    assert_eq!(record.tile_width, 100.0);
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    (
        "[A-Za-z0-9 ]{0,12}",
        any::<(u8, u8, u8)>(),
        -5000.0f64..5000.0,
        -5000.0f64..5000.0,
        -5000.0f64..5000.0,
        -5000.0f64..5000.0,
    )
        .prop_map(|(name, (r, g, b), x, y, w, h)| {
            Shape::new(name, Rgb::new(r, g, b).to_hex(), RectExtent::new(x, y, w, h))
        })
}

proptest! {
    #[test]
    fn export_import_round_trip(
        shapes in prop::collection::vec(arb_shape(), 0..8),
        tw in 0.5f64..1000.0,
        th in 0.5f64..1000.0,
    ) {
        let store = ShapeStore::from_shapes(shapes);
        let config = TileConfig::new(tw, th);
        let json = LayoutRecord::new(&store, &config).to_json().unwrap();

        let mut state = LayoutState::new();
        state.apply_import(LayoutRecord::from_json(&json).unwrap());

        prop_assert_eq!(state.shapes, store);
        prop_assert_eq!(state.tile_config, config);
    }
}
