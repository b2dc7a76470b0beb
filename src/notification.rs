use egui::{Align2, Color32, Context, Id, RichText};

/// How long a toast stays on screen, in seconds
pub const TOAST_DURATION: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    pub expires_at: f64,
}

/// Short lived messages shown over the canvas
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn info(&mut self, text: impl Into<String>) {
        self.push_at(ToastKind::Info, text.into(), now_secs());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push_at(ToastKind::Error, text.into(), now_secs());
    }

    pub fn push_at(&mut self, kind: ToastKind, text: String, now: f64) {
        match kind {
            ToastKind::Info => log::info!("{text}"),
            ToastKind::Error => log::warn!("{text}"),
        }
        self.items.push(Toast {
            kind,
            text,
            expires_at: now + TOAST_DURATION,
        });
    }

    /// Drop expired toasts
    pub fn prune(&mut self, now: f64) {
        self.items.retain(|toast| toast.expires_at > now);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn show(&mut self, ctx: &Context) {
        self.prune(now_secs());
        if self.items.is_empty() {
            return;
        }

        egui::Area::new(Id::new("toasts"))
            .anchor(Align2::CENTER_BOTTOM, [0.0, -24.0])
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.items {
                    let color = match toast.kind {
                        ToastKind::Info => Color32::WHITE,
                        ToastKind::Error => Color32::from_rgb(255, 120, 120),
                    };
                    egui::Frame::popup(ui.style())
                        .fill(Color32::from_black_alpha(200))
                        .show(ui, |ui| {
                            ui.label(RichText::new(&toast.text).color(color));
                        });
                }
            });

        // Keep repainting so toasts disappear on time
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

fn now_secs() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64())
        .unwrap_or_default()
}
