use proptest::prelude::*;
use tilekit_layout::{compute_tiles, RectExtent, Shape, ShapeStore, TileConfig, TileSummary};

fn shape(w: f64, h: f64) -> Shape {
    Shape::new("t", "#808080", RectExtent::new(0.0, 0.0, w, h))
}

#[test]
fn test_default_config_is_100mm() {
    let cfg = TileConfig::default();
    assert_eq!(cfg.tile_width, 100.0);
    assert_eq!(cfg.tile_height, 100.0);
}

#[test]
fn test_exact_multiple_has_no_extra_tile() {
    let cfg = TileConfig::new(25.0, 40.0);
    assert_eq!(compute_tiles(&shape(100.0, 80.0), &cfg), 8);
    assert_eq!(compute_tiles(&shape(100.0, 80.1), &cfg), 9);
}

#[test]
fn test_summary_indices_follow_store_order() {
    let mut store = ShapeStore::new();
    store.push(Shape::new("Kitchen", "#ff0000", RectExtent::new(0.0, 0.0, 300.0, 200.0)));
    store.push(Shape::new("", "#00ff00", RectExtent::new(0.0, 0.0, 49.5, -10.5)));
    let summary = TileSummary::build(&store, &TileConfig::default());
    assert_eq!(
        summary.to_lines(),
        [
            "1. Kitchen - Size: 300mm x 200mm, Tiles needed: 6",
            "2. Object - Size: 50mm x -10mm, Tiles needed: 1",
        ]
    );
    assert_eq!(summary.total_tiles(), 7);
}

proptest! {
    #[test]
    fn zero_width_or_height_needs_no_tiles(
        other in -1e4f64..1e4,
        tw in 0.1f64..500.0,
        th in 0.1f64..500.0,
    ) {
        let cfg = TileConfig::new(tw, th);
        prop_assert_eq!(compute_tiles(&shape(0.0, other), &cfg), 0);
        prop_assert_eq!(compute_tiles(&shape(other, 0.0), &cfg), 0);
    }

    #[test]
    fn tiles_match_ceiling_formula(
        w in -2000.0f64..2000.0,
        h in -2000.0f64..2000.0,
        tw in 1.0f64..500.0,
        th in 1.0f64..500.0,
    ) {
        let cfg = TileConfig::new(tw, th);
        let expected = ((w.abs() * h.abs()) / (tw * th)).ceil() as u64;
        prop_assert_eq!(compute_tiles(&shape(w, h), &cfg), expected);
    }

    #[test]
    fn tiles_monotonic_in_area(
        w in 0.0f64..2000.0,
        h in 0.0f64..2000.0,
        grow in 0.0f64..500.0,
        tw in 1.0f64..500.0,
        th in 1.0f64..500.0,
    ) {
        let cfg = TileConfig::new(tw, th);
        let small = compute_tiles(&shape(w, h), &cfg);
        let large = compute_tiles(&shape(w + grow, h), &cfg);
        prop_assert!(small <= large);
    }

    #[test]
    fn non_positive_sizes_fall_back_to_one(bad in -1000.0f64..=0.0) {
        let cfg = TileConfig::new(bad, bad);
        prop_assert_eq!(cfg.tile_area(), 1.0);
        prop_assert_eq!(compute_tiles(&shape(7.0, 3.0), &cfg), 21);
    }
}
