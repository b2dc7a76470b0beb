use egui::Pos2;

use crate::tools::{Paint, ShapeKind};

/// Geometry of a committed mark, in surface pixels
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeGeometry {
    /// Freehand polyline; a single point is drawn as a dot
    Path(Vec<Pos2>),
    Line { start: Pos2, end: Pos2 },
    Rectangle { start: Pos2, end: Pos2 },
    RoundedRectangle { start: Pos2, end: Pos2, radius: f32 },
    Ellipse { start: Pos2, end: Pos2 },
}

// Immutable stroke handed from the gesture machine to the rasterizer
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    geometry: StrokeGeometry,
    paint: Paint,
}

impl Stroke {
    pub fn new(geometry: StrokeGeometry, paint: Paint) -> Self {
        Self { geometry, paint }
    }

    /// Build the mark a gesture of `kind` describes.
    ///
    /// `points` is the accumulated brush path; bounded shapes only look at
    /// `start` and `end`.
    pub fn from_gesture(
        kind: ShapeKind,
        start: Pos2,
        end: Pos2,
        points: &[Pos2],
        corner_radius: f32,
        paint: Paint,
    ) -> Self {
        let geometry = match kind {
            ShapeKind::Brush => StrokeGeometry::Path(points.to_vec()),
            ShapeKind::Line => StrokeGeometry::Line { start, end },
            ShapeKind::Rectangle => StrokeGeometry::Rectangle { start, end },
            ShapeKind::RoundedRectangle => StrokeGeometry::RoundedRectangle {
                start,
                end,
                radius: corner_radius,
            },
            ShapeKind::Ellipse => StrokeGeometry::Ellipse { start, end },
        };
        Self::new(geometry, paint)
    }

    pub fn geometry(&self) -> &StrokeGeometry {
        &self.geometry
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    pub fn kind(&self) -> ShapeKind {
        match self.geometry {
            StrokeGeometry::Path(_) => ShapeKind::Brush,
            StrokeGeometry::Line { .. } => ShapeKind::Line,
            StrokeGeometry::Rectangle { .. } => ShapeKind::Rectangle,
            StrokeGeometry::RoundedRectangle { .. } => ShapeKind::RoundedRectangle,
            StrokeGeometry::Ellipse { .. } => ShapeKind::Ellipse,
        }
    }
}
