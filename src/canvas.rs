use egui::Pos2;
use tiny_skia::Pixmap;

use crate::config::SketchConfig;
use crate::error::SurfaceError;
use crate::input::{TouchEvent, TouchPhase};
use crate::state::GestureState;
use crate::stroke::Stroke;
use crate::surface::Surface;
use crate::tools::{BrushSettings, ShapeKind};

/// The drawing view: persistent surface, the gesture in progress and the
/// brush configuration.
///
/// Coordinates handed to the touch methods are surface pixels.
#[derive(Debug)]
pub struct DrawingCanvas {
    surface: Surface,
    gesture: GestureState,
    shape: ShapeKind,
    brush: BrushSettings,
    pixels_per_point: f32,
    jitter_tolerance: f32,
    corner_radius: f32,
    /// Bumped whenever the live preview changes
    preview_version: u64,
    unsaved_changes: bool,
}

impl DrawingCanvas {
    pub fn new(width: u32, height: u32, config: &SketchConfig) -> Result<Self, SurfaceError> {
        Ok(Self {
            surface: Surface::new(width, height)?,
            gesture: GestureState::Idle,
            shape: ShapeKind::default(),
            brush: BrushSettings::with_width(config.default_brush_width),
            pixels_per_point: 1.0,
            jitter_tolerance: config.jitter_tolerance,
            corner_radius: config.corner_radius,
            preview_version: 0,
            unsaved_changes: false,
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn set_shape(&mut self, shape: ShapeKind) {
        self.shape = shape;
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    pub fn set_brush(&mut self, brush: BrushSettings) {
        self.brush = brush;
    }

    pub fn set_brush_width(&mut self, width: f32) {
        self.brush.width = width;
    }

    pub fn set_color(&mut self, color: egui::Color32) {
        self.brush.color = color;
    }

    pub fn set_erase(&mut self, erase: bool) {
        self.brush.erase = erase;
    }

    /// Display scale used to turn logical widths into surface pixels
    pub fn set_pixels_per_point(&mut self, pixels_per_point: f32) {
        self.pixels_per_point = pixels_per_point.max(f32::EPSILON);
    }

    /// Follow the size of the on-screen canvas
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        self.surface.resize(width, height)
    }

    pub fn handle_touch(&mut self, event: TouchEvent) {
        match event.phase {
            TouchPhase::Started => self.press(event.pos),
            TouchPhase::Moved => self.drag(event.pos),
            TouchPhase::Ended => self.release(event.pos),
            TouchPhase::Cancelled => self.cancel(),
        }
    }

    pub fn press(&mut self, pos: Pos2) {
        let paint = self.brush.paint(self.pixels_per_point);
        let radius = self.corner_radius * self.pixels_per_point;
        self.gesture.press(pos, self.shape, paint, radius);
        self.preview_version += 1;
    }

    pub fn drag(&mut self, pos: Pos2) {
        if self.gesture.drag(pos, self.jitter_tolerance) {
            self.preview_version += 1;
        }
    }

    /// Finish the gesture and rasterize it onto the surface
    pub fn release(&mut self, pos: Pos2) {
        if let Some(stroke) = self.gesture.release(pos, self.jitter_tolerance) {
            log::debug!(
                "Committing {:?} ({} px, erase: {})",
                stroke.kind(),
                stroke.paint().width,
                stroke.paint().erase
            );
            if self.surface.commit(&stroke) {
                self.unsaved_changes = true;
            }
            self.preview_version += 1;
        }
    }

    pub fn cancel(&mut self) {
        if self.gesture.is_active() {
            self.gesture.cancel();
            self.preview_version += 1;
        }
    }

    /// Wipe the surface and forget any gesture in progress
    pub fn start_new(&mut self) {
        self.gesture.cancel();
        self.surface.clear();
        self.preview_version += 1;
        self.unsaved_changes = true;
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    pub fn mark_saved(&mut self) {
        self.unsaved_changes = false;
    }

    pub fn preview(&self) -> Option<Stroke> {
        self.gesture.preview()
    }

    /// Surface pixels with the live gesture drawn on top
    pub fn composite(&self) -> Pixmap {
        self.surface.composite(self.preview().as_ref())
    }

    /// Changes whenever [`Self::composite`] would produce a different image
    pub fn frame_version(&self) -> (u64, u64) {
        (self.surface.version(), self.preview_version)
    }

    pub fn cursor(&self) -> Option<Pos2> {
        self.gesture.cursor()
    }
}
