use egui::{Color32, Rect, Sense, Stroke, pos2};

use crate::SketchApp;

/// Cursor ring drawn over the canvas while drawing, in points
const CURSOR_RADIUS: f32 = 10.0;
const CURSOR_WIDTH: f32 = 4.0;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(Color32::WHITE))
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
            let rect = response.rect;
            let pixels_per_point = ctx.pixels_per_point();

            let width = (rect.width() * pixels_per_point).round() as u32;
            let height = (rect.height() * pixels_per_point).round() as u32;
            if width == 0 || height == 0 {
                return;
            }

            app.canvas_mut().set_pixels_per_point(pixels_per_point);
            if let Err(err) = app.canvas_mut().resize(width, height) {
                log::warn!("Could not resize canvas: {err}");
                return;
            }

            // Dialogs own the pointer while open
            if !app.dialog().is_open() {
                let input = app.input_mut();
                input.set_canvas_rect(rect, pixels_per_point);
                let events = input.process_input(ctx);
                for event in events {
                    app.canvas_mut().handle_touch(event);
                }
            } else if app.canvas().gesture().is_active() {
                app.canvas_mut().cancel();
            }

            let (canvas, texture) = app.canvas_and_texture();
            let texture_id = texture.get_or_update(ctx, canvas.frame_version(), || canvas.composite());
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture_id, rect, uv, Color32::WHITE);

            if let Some(cursor) = app.canvas().cursor() {
                let center = rect.min + cursor.to_vec2() / pixels_per_point;
                painter.circle_stroke(center, CURSOR_RADIUS, Stroke::new(CURSOR_WIDTH, Color32::BLACK));
            }
        });
}
