use crate::SketchApp;
use crate::command::Command;
use crate::dialogs::Dialog;
use crate::tools::{ShapeKind, palette_color_name};

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            if ui.button("New").clicked() {
                app.open_dialog(Dialog::ConfirmNewDrawing);
            }

            let saving = app.is_saving();
            let save_label = if saving { "Saving..." } else { "Save" };
            if ui.add_enabled(!saving, egui::Button::new(save_label)).clicked() {
                app.request_save(false);
            }

            ui.separator();

            let erasing = app.canvas().brush().erase;
            if ui.selectable_label(erasing, "Erase").clicked() {
                app.execute(Command::Erase);
            }

            let active = app.canvas().shape();
            for shape in ShapeKind::ALL {
                let selected = !erasing && active == shape;
                if ui.selectable_label(selected, shape.name()).clicked() {
                    log::info!("Tool selected from UI: {}", shape.name());
                    app.execute(Command::SelectShape(shape));
                }
            }

            ui.separator();

            let color = app.canvas().brush().color;
            let swatch = egui::Button::new("Color")
                .fill(color)
                .stroke(egui::Stroke::new(1.0, egui::Color32::GRAY));
            let hover = palette_color_name(color).unwrap_or("Custom color");
            if ui.add(swatch).on_hover_text(hover).clicked() {
                app.open_dialog(Dialog::Palette);
            }

            ui.label(format!("{:.0} px", app.canvas().brush().width));
        });
    });
}
