use egui::Color32;

use crate::canvas::DrawingCanvas;
use crate::config::SketchConfig;
use crate::tools::{BrushSize, ShapeKind};

/// Actions triggered from the toolbar and its dialogs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Pick a drawing tool. Turns erasing off; line and rectangle tools
    /// also reset the width to the outline width.
    SelectShape(ShapeKind),
    /// Size chosen in the brush size dialog; switches to the brush
    SelectBrushSize(BrushSize),
    /// Start erasing. The size dialog follows.
    Erase,
    /// Brush size dialog dismissed without a choice
    CancelBrushSize,
    PickColor(Color32),
    /// Throw the current drawing away
    NewDrawing,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectShape(_) => "Select shape",
            Self::SelectBrushSize(_) => "Select brush size",
            Self::Erase => "Erase",
            Self::CancelBrushSize => "Cancel brush size",
            Self::PickColor(_) => "Pick color",
            Self::NewDrawing => "New drawing",
        }
    }

    /// Whether the shell follows this command with the brush size dialog
    pub fn opens_brush_size_dialog(&self) -> bool {
        matches!(self, Self::Erase | Self::SelectShape(ShapeKind::Brush))
    }

    pub fn execute(&self, canvas: &mut DrawingCanvas, config: &SketchConfig) {
        log::info!("Executing command: {:?}", self);
        match *self {
            Self::SelectShape(kind) => {
                canvas.set_erase(false);
                if kind.resets_outline_width() {
                    canvas.set_brush_width(config.shape_outline_width);
                }
                canvas.set_shape(kind);
            }
            Self::SelectBrushSize(size) => {
                canvas.set_brush_width(size.width(&config.brush_sizes));
                canvas.set_shape(ShapeKind::Brush);
            }
            Self::Erase => canvas.set_erase(true),
            Self::CancelBrushSize => canvas.set_erase(false),
            Self::PickColor(color) => canvas.set_color(color),
            Self::NewDrawing => canvas.start_new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> (DrawingCanvas, SketchConfig) {
        let config = SketchConfig::default();
        (DrawingCanvas::new(32, 32, &config).unwrap(), config)
    }

    #[test]
    fn test_select_rectangle_resets_width_and_erase() {
        let (mut canvas, config) = canvas();
        canvas.set_erase(true);
        canvas.set_brush_width(30.0);
        Command::SelectShape(ShapeKind::Rectangle).execute(&mut canvas, &config);
        assert_eq!(canvas.shape(), ShapeKind::Rectangle);
        assert_eq!(canvas.brush().width, config.shape_outline_width);
        assert!(!canvas.brush().erase);
    }

    #[test]
    fn test_select_ellipse_keeps_width() {
        let (mut canvas, config) = canvas();
        canvas.set_brush_width(30.0);
        Command::SelectShape(ShapeKind::Ellipse).execute(&mut canvas, &config);
        assert_eq!(canvas.shape(), ShapeKind::Ellipse);
        assert_eq!(canvas.brush().width, 30.0);
    }

    #[test]
    fn test_eraser_size_keeps_erasing() {
        let (mut canvas, config) = canvas();
        Command::Erase.execute(&mut canvas, &config);
        Command::SelectBrushSize(BrushSize::Large).execute(&mut canvas, &config);
        assert!(canvas.brush().erase);
        assert_eq!(canvas.shape(), ShapeKind::Brush);
        assert_eq!(canvas.brush().width, config.brush_sizes.large);
    }

    #[test]
    fn test_cancel_brush_size_stops_erasing() {
        let (mut canvas, config) = canvas();
        Command::Erase.execute(&mut canvas, &config);
        Command::CancelBrushSize.execute(&mut canvas, &config);
        assert!(!canvas.brush().erase);
    }

    #[test]
    fn test_dialog_followups() {
        assert!(Command::Erase.opens_brush_size_dialog());
        assert!(Command::SelectShape(ShapeKind::Brush).opens_brush_size_dialog());
        assert!(!Command::SelectShape(ShapeKind::Line).opens_brush_size_dialog());
    }
}
