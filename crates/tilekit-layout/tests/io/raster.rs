use tilekit_layout::{
    render_scene, render_to_image, save_png, RasterTarget, RectExtent, Shape, SurfaceSize,
};

#[test]
fn test_grid_lines_are_grey() {
    let size = SurfaceSize::new(40, 40);
    let image = render_to_image(&render_scene(size, std::iter::empty(), None), size).unwrap();
    // Between grid lines stays white; the row at y = 10 is tinted.
    assert_eq!(image.get_pixel(5, 5).0, [255, 255, 255]);
    let tinted = [9, 10]
        .iter()
        .any(|&y| image.get_pixel(5, y).0 != [255, 255, 255]);
    assert!(tinted);
}

#[test]
fn test_grid_is_drawn_across_the_image() {
    let size = SurfaceSize::new(40, 40);
    let image = render_to_image(&render_scene(size, std::iter::empty(), None), size).unwrap();
    let tinted = image.pixels().filter(|p| p.0 != [255, 255, 255]).count();
    assert!(tinted > 0, "expected grid pixels in the export");
    for y in [9, 19, 29] {
        let row_tinted = [y, y + 1]
            .iter()
            .any(|&y| image.get_pixel(25, y).0 != [255, 255, 255]);
        assert!(row_tinted, "no grid line near y = {}", y + 1);
    }
}

#[test]
fn test_shape_fill_color() {
    let size = SurfaceSize::new(60, 60);
    let shape = Shape::new("", "#ff7f50", RectExtent::new(10.0, 10.0, 40.0, 40.0));
    let image = render_to_image(&render_scene(size, [&shape], None), size).unwrap();
    assert_eq!(image.get_pixel(45, 45).0, [0xff, 0x7f, 0x50]);
}

#[test]
fn test_save_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("layout.png");
    let size = SurfaceSize::new(20, 20);
    let image = render_to_image(&render_scene(size, std::iter::empty(), None), size).unwrap();
    save_png(&image, &path).expect("save failed");

    let loaded = image::open(&path).expect("png unreadable").to_rgb8();
    assert_eq!(loaded.dimensions(), (20, 20));
}

#[test]
fn test_pixel_outside_surface() {
    let target = RasterTarget::new(SurfaceSize::new(4, 4)).unwrap();
    assert_eq!(target.pixel(4, 0), None);
    assert_eq!(target.pixel(0, 4), None);
    assert!(target.pixel(3, 3).is_some());
    assert_eq!(target.width(), 4);
    assert_eq!(target.height(), 4);
}
