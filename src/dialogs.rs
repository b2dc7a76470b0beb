use egui::{Color32, Context, Vec2};

use crate::command::Command;
use crate::tools::{BrushSize, PALETTE};

/// The modal dialog currently open, if any
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Dialog {
    #[default]
    None,
    ConfirmNewDrawing,
    BrushSize,
    Palette,
    SaveName {
        name: String,
        /// Exit once the drawing is written
        close_when_done: bool,
    },
    SaveBeforeExit,
}

/// What the user chose in a dialog
#[derive(Debug, Clone, PartialEq)]
pub enum DialogAction {
    Execute(Command),
    Save {
        name: String,
        close_when_done: bool,
    },
    SaveBeforeExit,
    ExitWithoutSaving,
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Draw the open dialog. Closing it (by any button) resets `self` to
    /// [`Dialog::None`].
    pub fn show(&mut self, ctx: &Context) -> Option<DialogAction> {
        let mut action = None;
        let mut close = false;

        match self {
            Self::None => return None,
            Self::ConfirmNewDrawing => {
                modal(ctx, "New drawing", |ui| {
                    ui.label("Start new drawing (you will lose the current drawing)?");
                    ui.horizontal(|ui| {
                        if ui.button("Yes").clicked() {
                            action = Some(DialogAction::Execute(Command::NewDrawing));
                            close = true;
                        }
                        if ui.button("Cancel").clicked() {
                            close = true;
                        }
                    });
                });
            }
            Self::BrushSize => {
                modal(ctx, "Brush size", |ui| {
                    ui.horizontal(|ui| {
                        for size in BrushSize::ALL {
                            if ui.button(size.label()).clicked() {
                                let command = Command::SelectBrushSize(size);
                                action = Some(DialogAction::Execute(command));
                                close = true;
                            }
                        }
                    });
                    if ui.button("Cancel").clicked() {
                        action = Some(DialogAction::Execute(Command::CancelBrushSize));
                        close = true;
                    }
                });
            }
            Self::Palette => {
                modal(ctx, "Color", |ui| {
                    egui::Grid::new("palette_grid").spacing([4.0, 4.0]).show(ui, |ui| {
                        for (index, (color, name)) in PALETTE.iter().enumerate() {
                            let swatch = egui::Button::new("")
                                .fill(*color)
                                .stroke(egui::Stroke::new(1.0, Color32::GRAY))
                                .min_size(Vec2::splat(32.0));
                            if ui.add(swatch).on_hover_text(*name).clicked() {
                                action = Some(DialogAction::Execute(Command::PickColor(*color)));
                                close = true;
                            }
                            if index % 4 == 3 {
                                ui.end_row();
                            }
                        }
                    });
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            }
            Self::SaveName {
                name,
                close_when_done,
            } => {
                modal(ctx, "Name of drawing", |ui| {
                    let response = ui.text_edit_singleline(name);
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    // Focus the field once when the dialog opens
                    if !submitted && ui.memory(|m| m.focused().is_none()) {
                        response.request_focus();
                    }
                    ui.horizontal(|ui| {
                        if ui.button("Save").clicked() || submitted {
                            action = Some(DialogAction::Save {
                                name: name.clone(),
                                close_when_done: *close_when_done,
                            });
                            close = true;
                        }
                        if ui.button("Cancel").clicked() {
                            close = true;
                        }
                    });
                });
            }
            Self::SaveBeforeExit => {
                modal(ctx, "Do you want to save the drawing?", |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("Yes").clicked() {
                            action = Some(DialogAction::SaveBeforeExit);
                            close = true;
                        }
                        if ui.button("No").clicked() {
                            action = Some(DialogAction::ExitWithoutSaving);
                            close = true;
                        }
                    });
                });
            }
        }

        if close {
            *self = Self::None;
        }
        action
    }
}

fn modal(ctx: &Context, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, add_contents);
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Key, Modifiers, RawInput, Rect, pos2, vec2};

    fn run_frame(ctx: &Context, dialog: &mut Dialog, events: Vec<Event>) -> Option<DialogAction> {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))),
            events,
            ..RawInput::default()
        };
        let mut action = None;
        let _ = ctx.run(input, |ctx| {
            if let Some(chosen) = dialog.show(ctx) {
                action = Some(chosen);
            }
        });
        action
    }

    fn enter() -> Event {
        Event::Key {
            key: Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_enter_submits_typed_name() {
        let ctx = Context::default();
        let mut dialog = Dialog::SaveName {
            name: String::new(),
            close_when_done: false,
        };

        for _ in 0..3 {
            assert_eq!(run_frame(&ctx, &mut dialog, Vec::new()), None);
        }
        run_frame(&ctx, &mut dialog, vec![Event::Text("cat".to_owned())]);
        assert_eq!(
            dialog,
            Dialog::SaveName {
                name: "cat".to_owned(),
                close_when_done: false
            }
        );

        let action = run_frame(&ctx, &mut dialog, vec![enter()]);
        assert_eq!(
            action,
            Some(DialogAction::Save {
                name: "cat".to_owned(),
                close_when_done: false
            })
        );
        assert_eq!(dialog, Dialog::None);
    }

    #[test]
    fn test_closed_dialog_shows_nothing() {
        let ctx = Context::default();
        let mut dialog = Dialog::None;
        assert_eq!(run_frame(&ctx, &mut dialog, vec![enter()]), None);
        assert!(!dialog.is_open());
    }
}
