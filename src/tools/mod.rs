use serde::{Deserialize, Serialize};

mod brush;
mod palette;

pub use brush::{BrushSettings, BrushSize, Paint};
pub use palette::{PALETTE, palette_color_name};

/// The kinds of mark a gesture can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Line,
    Rectangle,
    RoundedRectangle,
    Ellipse,
    Brush,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Brush,
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::RoundedRectangle,
        ShapeKind::Ellipse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded rectangle",
            Self::Ellipse => "Ellipse",
            Self::Brush => "Brush",
        }
    }

    /// Bounded shapes are defined only by the gesture's start and end points
    pub fn is_bounded(self) -> bool {
        !matches!(self, Self::Brush)
    }

    /// Whether picking this tool also resets the width to the outline width
    pub fn resets_outline_width(self) -> bool {
        matches!(self, Self::Line | Self::Rectangle | Self::RoundedRectangle)
    }
}
