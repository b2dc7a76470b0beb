//! Rasterizes committed strokes with tiny-skia.
//!
//! Every mark is stroked (never filled) with round caps and joins.
//! Erasing strokes use the `Clear` blend mode, so the pixels they cover
//! become fully transparent instead of taking a color.

use egui::Pos2;
use tiny_skia::{
    BlendMode, FillRule, LineCap, LineJoin, Paint as SkiaPaint, Path, PathBuilder, Pixmap,
    Rect as SkiaRect, Stroke as SkiaStroke, Transform,
};

use crate::stroke::{Stroke, StrokeGeometry};
use crate::tools::Paint;

/// Cubic bezier control distance approximating a quarter circle
const KAPPA: f32 = 0.552_284_8;

/// Draw `stroke` onto `pixmap`. Returns false, leaving the pixmap as it
/// was, for degenerate shapes.
pub fn rasterize(pixmap: &mut Pixmap, stroke: &Stroke) -> bool {
    let paint = stroke.paint();
    let skia_paint = skia_paint(paint);

    let path = match stroke.geometry() {
        StrokeGeometry::Path(points) => match points.as_slice() {
            [] => None,
            [point] => return fill_dot(pixmap, *point, paint.width, &skia_paint),
            points => polyline(points),
        },
        StrokeGeometry::Line { start, end } => {
            if start == end {
                return fill_dot(pixmap, *start, paint.width, &skia_paint);
            }
            polyline(&[*start, *end])
        }
        StrokeGeometry::Rectangle { start, end } => {
            normalized_rect(*start, *end).map(PathBuilder::from_rect)
        }
        StrokeGeometry::RoundedRectangle { start, end, radius } => {
            normalized_rect(*start, *end).and_then(|rect| rounded_rect(rect, *radius))
        }
        StrokeGeometry::Ellipse { start, end } => {
            normalized_rect(*start, *end).and_then(PathBuilder::from_oval)
        }
    };

    match path {
        Some(path) => {
            stroke_path(pixmap, &path, paint, &skia_paint);
            true
        }
        None => false,
    }
}

fn skia_paint(paint: &Paint) -> SkiaPaint<'static> {
    let mut skia_paint = SkiaPaint::default();
    let [r, g, b, a] = paint.color.to_srgba_unmultiplied();
    skia_paint.set_color_rgba8(r, g, b, a);
    skia_paint.anti_alias = true;
    if paint.erase {
        skia_paint.blend_mode = BlendMode::Clear;
    }
    skia_paint
}

fn stroke_path(pixmap: &mut Pixmap, path: &Path, paint: &Paint, skia_paint: &SkiaPaint<'_>) {
    let stroke = SkiaStroke {
        width: paint.width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..SkiaStroke::default()
    };
    pixmap.stroke_path(path, skia_paint, &stroke, Transform::identity(), None);
}

fn fill_dot(pixmap: &mut Pixmap, center: Pos2, width: f32, skia_paint: &SkiaPaint<'_>) -> bool {
    let Some(path) = PathBuilder::from_circle(center.x, center.y, width / 2.0) else {
        return false;
    };
    pixmap.fill_path(
        &path,
        skia_paint,
        FillRule::Winding,
        Transform::identity(),
        None,
    );
    true
}

fn polyline(points: &[Pos2]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut builder = PathBuilder::new();
    builder.move_to(first.x, first.y);
    for point in rest {
        builder.line_to(point.x, point.y);
    }
    builder.finish()
}

/// Bounding box of two corners in any order; `None` if it has no area
fn normalized_rect(a: Pos2, b: Pos2) -> Option<SkiaRect> {
    let (left, right) = (a.x.min(b.x), a.x.max(b.x));
    let (top, bottom) = (a.y.min(b.y), a.y.max(b.y));
    if right - left <= 0.0 || bottom - top <= 0.0 {
        return None;
    }
    SkiaRect::from_ltrb(left, top, right, bottom)
}

fn rounded_rect(rect: SkiaRect, radius: f32) -> Option<Path> {
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    if r == 0.0 {
        return Some(PathBuilder::from_rect(rect));
    }
    let (l, t, right, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let k = r * KAPPA;

    let mut builder = PathBuilder::new();
    builder.move_to(l + r, t);
    builder.line_to(right - r, t);
    builder.cubic_to(right - r + k, t, right, t + r - k, right, t + r);
    builder.line_to(right, b - r);
    builder.cubic_to(right, b - r + k, right - r + k, b, right - r, b);
    builder.line_to(l + r, b);
    builder.cubic_to(l + r - k, b, l, b - r + k, l, b - r);
    builder.line_to(l, t + r);
    builder.cubic_to(l, t + r - k, l + r - k, t, l + r, t);
    builder.close();
    builder.finish()
}
