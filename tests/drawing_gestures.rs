use eframe_sketchpad::command::Command;
use eframe_sketchpad::{DrawingCanvas, ShapeKind, SketchConfig};
use egui::{Color32, Pos2, pos2};

fn create_test_canvas() -> (DrawingCanvas, SketchConfig) {
    let config = SketchConfig::default();
    (DrawingCanvas::new(64, 64, &config).unwrap(), config)
}

fn alpha_at(canvas: &DrawingCanvas, x: u32, y: u32) -> u8 {
    canvas.surface().pixmap().pixel(x, y).unwrap().alpha()
}

fn draw(canvas: &mut DrawingCanvas, points: &[Pos2]) {
    let (first, rest) = points.split_first().unwrap();
    canvas.press(*first);
    for point in rest {
        canvas.drag(*point);
    }
    canvas.release(*points.last().unwrap());
}

#[test]
fn test_surface_untouched_until_release() {
    let (mut canvas, config) = create_test_canvas();
    Command::SelectShape(ShapeKind::Rectangle).execute(&mut canvas, &config);

    canvas.press(pos2(10.0, 10.0));
    canvas.drag(pos2(30.0, 30.0));
    canvas.drag(pos2(50.0, 50.0));

    // Preview shows up in the composite but not on the surface
    assert!(canvas.surface().is_blank());
    assert!(canvas.composite().data().iter().any(|&byte| byte != 0));

    canvas.release(pos2(50.0, 50.0));
    assert!(!canvas.surface().is_blank());
    assert!(canvas.preview().is_none());
}

#[test]
fn test_bounded_shape_depends_only_on_start_and_end() {
    for shape in [
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::RoundedRectangle,
        ShapeKind::Ellipse,
    ] {
        let (mut direct, config) = create_test_canvas();
        let (mut wandering, _) = create_test_canvas();
        Command::SelectShape(shape).execute(&mut direct, &config);
        Command::SelectShape(shape).execute(&mut wandering, &config);

        draw(&mut direct, &[pos2(8.0, 12.0), pos2(56.0, 50.0)]);
        draw(
            &mut wandering,
            &[
                pos2(8.0, 12.0),
                pos2(60.0, 4.0),
                pos2(2.0, 62.0),
                pos2(40.0, 20.0),
                pos2(56.0, 50.0),
            ],
        );

        assert_eq!(
            direct.surface().pixmap().data(),
            wandering.surface().pixmap().data(),
            "{shape:?} depends on intermediate samples"
        );
    }
}

#[test]
fn test_jitter_collapses_to_a_dot() {
    let (mut canvas, config) = create_test_canvas();
    Command::SelectBrushSize(eframe_sketchpad::BrushSize::Small).execute(&mut canvas, &config);

    draw(
        &mut canvas,
        &[
            pos2(32.0, 32.0),
            pos2(33.0, 33.0),
            pos2(34.0, 31.0),
            pos2(33.0, 34.0),
        ],
    );

    // Small brush is 10px wide: a dot of radius 5 around the press point
    assert_eq!(alpha_at(&canvas, 32, 32), 255);
    assert_eq!(alpha_at(&canvas, 32, 45), 0);
    assert_eq!(alpha_at(&canvas, 45, 32), 0);
}

#[test]
fn test_brush_follows_accepted_samples() {
    let (mut canvas, config) = create_test_canvas();
    Command::SelectBrushSize(eframe_sketchpad::BrushSize::Small).execute(&mut canvas, &config);

    draw(
        &mut canvas,
        &[pos2(8.0, 32.0), pos2(32.0, 32.0), pos2(32.0, 56.0)],
    );

    assert_eq!(alpha_at(&canvas, 20, 32), 255);
    assert_eq!(alpha_at(&canvas, 32, 44), 255);
    // The corner of the L is never reached
    assert_eq!(alpha_at(&canvas, 10, 54), 0);
}

#[test]
fn test_color_change_is_not_retroactive() {
    let (mut canvas, config) = create_test_canvas();
    canvas.press(pos2(8.0, 32.0));
    canvas.drag(pos2(56.0, 32.0));
    Command::PickColor(Color32::RED).execute(&mut canvas, &config);
    canvas.release(pos2(56.0, 32.0));

    let pixel = canvas.surface().pixmap().pixel(32, 32).unwrap();
    assert_eq!(pixel.alpha(), 255);
    assert_eq!(pixel.red(), 0);

    // The next gesture picks up the new color
    canvas.press(pos2(32.0, 8.0));
    canvas.release(pos2(32.0, 8.0));
    let pixel = canvas.surface().pixmap().pixel(32, 8).unwrap();
    assert_eq!(pixel.red(), 255);
}

#[test]
fn test_erase_toggle_is_not_retroactive() {
    let (mut canvas, config) = create_test_canvas();
    Command::SelectBrushSize(eframe_sketchpad::BrushSize::Large).execute(&mut canvas, &config);

    canvas.press(pos2(4.0, 32.0));
    canvas.drag(pos2(60.0, 32.0));
    Command::Erase.execute(&mut canvas, &config);
    canvas.release(pos2(60.0, 32.0));

    // Started as a painting stroke, so it still paints
    assert!(canvas.brush().erase);
    assert_eq!(alpha_at(&canvas, 32, 32), 255);

    // The next gesture erases
    draw(&mut canvas, &[pos2(32.0, 4.0), pos2(32.0, 60.0)]);
    assert_eq!(alpha_at(&canvas, 32, 32), 0);
    assert_eq!(alpha_at(&canvas, 8, 32), 255);
}

#[test]
fn test_erase_clears_pixels() {
    let (mut canvas, config) = create_test_canvas();
    Command::SelectBrushSize(eframe_sketchpad::BrushSize::Large).execute(&mut canvas, &config);
    draw(&mut canvas, &[pos2(4.0, 32.0), pos2(60.0, 32.0)]);
    assert_eq!(alpha_at(&canvas, 32, 32), 255);

    Command::Erase.execute(&mut canvas, &config);
    Command::SelectBrushSize(eframe_sketchpad::BrushSize::Medium).execute(&mut canvas, &config);
    draw(&mut canvas, &[pos2(32.0, 4.0), pos2(32.0, 60.0)]);

    assert_eq!(alpha_at(&canvas, 32, 32), 0);
    assert_eq!(alpha_at(&canvas, 10, 32), 255);
}

#[test]
fn test_new_drawing_clears_and_drops_gesture() {
    let (mut canvas, config) = create_test_canvas();
    draw(&mut canvas, &[pos2(8.0, 8.0), pos2(56.0, 56.0)]);
    assert!(!canvas.surface().is_blank());

    canvas.press(pos2(8.0, 56.0));
    canvas.drag(pos2(56.0, 8.0));
    Command::NewDrawing.execute(&mut canvas, &config);
    canvas.release(pos2(56.0, 8.0));

    assert!(canvas.surface().is_blank());
    assert!(!canvas.gesture().is_active());
    // Tool choices survive a new drawing
    assert_eq!(canvas.shape(), ShapeKind::Line);
}

#[test]
fn test_resize_keeps_drawing() {
    let (mut canvas, _) = create_test_canvas();
    draw(&mut canvas, &[pos2(8.0, 8.0), pos2(24.0, 8.0)]);

    canvas.resize(128, 96).unwrap();
    assert_eq!(canvas.surface().size(), [128, 96]);
    assert_eq!(alpha_at(&canvas, 16, 8), 255);

    assert!(canvas.resize(0, 10).is_err());
}
