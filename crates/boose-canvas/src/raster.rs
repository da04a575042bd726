//! Immediate-mode rasterization onto a [`Surface`].
//!
//! Shapes are built with `kurbo` and painted by `tiny-skia` without
//! anti-aliasing, so every touched pixel is exactly the pen colour.
//! Outlines are 1-pixel hairlines drawn through pixel centres; fills cover
//! the pixels whose centres fall inside the shape. `tiny-skia` clips
//! everything to the pixmap.

use crate::colour::Colour;
use crate::surface::Surface;
use kurbo::{Line, PathEl, Shape};
use tiny_skia::{FillRule, LineCap, Paint, Path, PathBuilder, Rect, Stroke, Transform};

/// Curve tolerance in pixels when walking `kurbo` path elements.
const TOLERANCE: f64 = 0.1;

/// Offset that moves integer coordinates onto pixel centres.
const CENTRE: f64 = 0.5;

/// Draw a 1-pixel line between two integer points.
pub fn draw_line(surface: &mut Surface, from: (i64, i64), to: (i64, i64), colour: Colour) {
    if from == to {
        let Some(dot) = Rect::from_xywh(from.0 as f32, from.1 as f32, 1.0, 1.0) else {
            return;
        };
        surface
            .pixmap_mut()
            .fill_rect(dot, &paint(colour), Transform::identity(), None);
        return;
    }
    let line = Line::new(
        (from.0 as f64, from.1 as f64),
        (to.0 as f64, to.1 as f64),
    );
    stroke_shape(surface, &line, colour);
}

/// Stroke the outline of any `kurbo` shape with a 1-pixel hairline.
pub fn stroke_shape(surface: &mut Surface, shape: &impl Shape, colour: Colour) {
    let Some(path) = to_path(shape, CENTRE) else {
        return;
    };
    let stroke = Stroke {
        width: 0.0,
        line_cap: LineCap::Square,
        ..Default::default()
    };
    surface
        .pixmap_mut()
        .stroke_path(&path, &paint(colour), &stroke, Transform::identity(), None);
}

/// Paint every pixel whose centre lies inside `shape`.
pub fn fill_shape(surface: &mut Surface, shape: &impl Shape, colour: Colour) {
    let Some(path) = to_path(shape, 0.0) else {
        return;
    };
    surface.pixmap_mut().fill_path(
        &path,
        &paint(colour),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

fn paint(colour: Colour) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(colour.r, colour.g, colour.b, 255);
    paint.anti_alias = false;
    paint
}

/// Convert a `kurbo` shape to a `tiny-skia` path, shifted by `offset` on
/// both axes. `None` for empty or degenerate paths.
fn to_path(shape: &impl Shape, offset: f64) -> Option<Path> {
    let pt = |p: kurbo::Point| ((p.x + offset) as f32, (p.y + offset) as f32);
    let mut pb = PathBuilder::new();
    for el in shape.path_elements(TOLERANCE) {
        match el {
            PathEl::MoveTo(p) => {
                let (x, y) = pt(p);
                pb.move_to(x, y);
            }
            PathEl::LineTo(p) => {
                let (x, y) = pt(p);
                pb.line_to(x, y);
            }
            PathEl::QuadTo(p1, p2) => {
                let ((x1, y1), (x, y)) = (pt(p1), pt(p2));
                pb.quad_to(x1, y1, x, y);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let ((x1, y1), (x2, y2), (x, y)) = (pt(p1), pt(p2), pt(p3));
                pb.cubic_to(x1, y1, x2, y2, x, y);
            }
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}
