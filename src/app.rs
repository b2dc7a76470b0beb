use std::path::PathBuf;

use crate::canvas::DrawingCanvas;
use crate::command::Command;
use crate::config::SketchConfig;
use crate::dialogs::{Dialog, DialogAction};
use crate::error::{SaveError, SurfaceError};
use crate::file_handler::{ExportJob, FileHandler};
use crate::input::InputHandler;
use crate::notification::Toasts;
use crate::panels::{central_panel, tools_panel};
use crate::permission::{FsPermission, StoragePermission};
use crate::texture_manager::SurfaceTexture;
use crate::tools::{BrushSettings, ShapeKind};

/// Tool state restored on the next start
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PersistedTools {
    pub shape: ShapeKind,
    pub brush: BrushSettings,
}

/// An export running in the background
#[derive(Debug)]
struct PendingExport {
    job: ExportJob,
    /// Drawing content the export was taken from
    content_version: u64,
    close_when_done: bool,
}

pub struct SketchApp {
    config: SketchConfig,
    canvas: DrawingCanvas,
    input: InputHandler,
    texture: SurfaceTexture,
    file_handler: FileHandler,
    pending_export: Option<PendingExport>,
    dialog: Dialog,
    toasts: Toasts,
    /// Set once the user chose to leave without saving
    allow_close: bool,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Result<Self, SurfaceError> {
        let mut app = Self::with_config(config)?;
        if let Some(storage) = cc.storage {
            if let Some(tools) = eframe::get_value::<PersistedTools>(storage, eframe::APP_KEY) {
                log::info!("Restoring {} tool", tools.shape.name());
                app.canvas.set_shape(tools.shape);
                app.canvas.set_brush(tools.brush);
            }
        }
        Ok(app)
    }

    /// App without any eframe integration, writing into `config.save_dir`
    pub fn with_config(config: SketchConfig) -> Result<Self, SurfaceError> {
        Self::with_permission(config, Box::new(FsPermission))
    }

    pub fn with_permission(
        config: SketchConfig,
        permission: Box<dyn StoragePermission>,
    ) -> Result<Self, SurfaceError> {
        let [width, height] = config.initial_canvas_size;
        let canvas = DrawingCanvas::new(width, height, &config)?;
        let file_handler = FileHandler::new(config.save_dir.clone(), permission);
        Ok(Self {
            config,
            canvas,
            input: InputHandler::new(),
            texture: SurfaceTexture::default(),
            file_handler,
            pending_export: None,
            dialog: Dialog::None,
            toasts: Toasts::default(),
            allow_close: false,
        })
    }

    pub fn canvas(&self) -> &DrawingCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut DrawingCanvas {
        &mut self.canvas
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub(crate) fn canvas_and_texture(&mut self) -> (&mut DrawingCanvas, &mut SurfaceTexture) {
        (&mut self.canvas, &mut self.texture)
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn open_dialog(&mut self, dialog: Dialog) {
        self.dialog = dialog;
    }

    pub fn is_saving(&self) -> bool {
        self.pending_export.is_some()
    }

    pub fn execute(&mut self, command: Command) {
        command.execute(&mut self.canvas, &self.config);
        if command.opens_brush_size_dialog() {
            self.dialog = Dialog::BrushSize;
        }
    }

    /// Check access first, then ask for a name
    pub fn request_save(&mut self, close_when_done: bool) {
        match self.file_handler.ensure_permission() {
            Ok(()) => {
                self.dialog = Dialog::SaveName {
                    name: String::new(),
                    close_when_done,
                }
            }
            Err(err) => self.report_save_error(&err),
        }
    }

    /// Snapshot the drawing and write it on a worker thread
    pub fn start_export(&mut self, name: &str, close_when_done: bool) {
        if self.pending_export.is_some() {
            self.toasts.error("A drawing is already being saved");
            return;
        }
        let pixmap = self.canvas.composite();
        match self.file_handler.prepare(name, &pixmap) {
            Ok(request) => {
                let job = request.spawn();
                log::info!("Saving drawing to {}", job.path().display());
                self.pending_export = Some(PendingExport {
                    job,
                    content_version: self.canvas.surface().content_version(),
                    close_when_done,
                });
            }
            Err(err) => self.report_save_error(&err),
        }
    }

    /// Pick up the result of a finished export. Returns whether the window
    /// should now close.
    fn poll_export(&mut self) -> bool {
        let Some(pending) = &mut self.pending_export else {
            return false;
        };
        let Some(result) = pending.job.poll() else {
            return false;
        };
        let Some(pending) = self.pending_export.take() else {
            return false;
        };
        match result {
            Ok(path) => {
                self.finish_save(&path, pending.content_version);
                pending.close_when_done
            }
            Err(err) => {
                self.report_save_error(&err);
                false
            }
        }
    }

    fn finish_save(&mut self, path: &std::path::Path, content_version: u64) {
        // Drawing after the snapshot was taken still counts as unsaved
        if self.canvas.surface().content_version() == content_version {
            self.canvas.mark_saved();
        }
        let dir = path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.file_handler.save_dir().to_path_buf());
        self.toasts.info(format!("Drawing saved to {}", dir.display()));
    }

    fn report_save_error(&mut self, err: &SaveError) {
        log::error!("Save failed: {err}");
        let text = match err {
            SaveError::PermissionDenied => {
                "This app does not have permission to save image.".to_owned()
            }
            SaveError::InvalidName(_) => err.to_string(),
            _ => format!("Oops! Image could not be saved. ({err})"),
        };
        self.toasts.error(text);
    }

    fn handle_dialog_action(&mut self, ctx: &egui::Context, action: DialogAction) {
        match action {
            DialogAction::Execute(command) => self.execute(command),
            DialogAction::Save {
                name,
                close_when_done,
            } => self.start_export(&name, close_when_done),
            DialogAction::SaveBeforeExit => self.request_save(true),
            DialogAction::ExitWithoutSaving => {
                self.allow_close = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) {
            return;
        }
        if self.allow_close || !self.canvas.has_unsaved_changes() {
            return;
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        self.dialog = Dialog::SaveBeforeExit;
    }
}

impl std::fmt::Debug for SketchApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SketchApp")
            .field("canvas", &self.canvas)
            .field("dialog", &self.dialog)
            .field("saving", &self.is_saving())
            .finish_non_exhaustive()
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let tools = PersistedTools {
            shape: self.canvas.shape(),
            brush: *self.canvas.brush(),
        };
        eframe::set_value(storage, eframe::APP_KEY, &tools);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.poll_export() {
            self.allow_close = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if self.pending_export.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        self.handle_close_request(ctx);

        tools_panel(self, ctx);
        central_panel(self, ctx);

        if let Some(action) = self.dialog.show(ctx) {
            self.handle_dialog_action(ctx, action);
        }
        self.toasts.show(ctx);
    }
}
