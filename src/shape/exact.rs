//! Default theme: the shape's exact geometry.

use crate::geom::Point;

use super::outline::{clamp_radius, line_endpoints, polygon_points, triangle_points};
use super::path::PathBuilder;
use super::{GenContext, PathError, ShapeDescriptor, ShapeKind, StrokeProps, Theme, ThemeStrategy, icons, supports_all};

pub(super) static STRATEGY: ThemeStrategy = ThemeStrategy {
    theme: Theme::Default,
    supports: supports_all,
    generate: path,
    props,
};

fn props(desc: &ShapeDescriptor, ctx: &GenContext<'_>) -> StrokeProps {
    ctx.base_props(desc)
}

/// Reject descriptors that would serialize `NaN` or `inf` into the path.
pub(super) fn check_finite(desc: &ShapeDescriptor) -> Result<(), PathError> {
    if !(desc.width.is_finite() && desc.height.is_finite()) {
        return Err(PathError::NonFinite("size"));
    }
    if !desc.points.iter().all(|p| p.is_finite()) {
        return Err(PathError::NonFinite("point"));
    }
    if desc.corner_radius.is_some_and(|r| !r.is_finite()) {
        return Err(PathError::NonFinite("corner radius"));
    }
    Ok(())
}

/// Exact path data for `desc`.
pub(super) fn path(desc: &ShapeDescriptor, _ctx: &GenContext<'_>) -> Result<String, PathError> {
    check_finite(desc)?;
    let (w, h) = (desc.width, desc.height);
    let mut b = PathBuilder::new();
    match desc.kind {
        ShapeKind::Rect => {
            let r = clamp_radius(desc.corner_radius.unwrap_or(0.0), w, h);
            if r > 0.0 {
                rounded_rect(&mut b, w, h, r);
            } else {
                b.polygon(&[Point::new(0.0, 0.0), Point::new(w, 0.0), Point::new(w, h), Point::new(0.0, h)]);
            }
        }
        ShapeKind::Circle => b.ellipse(0.0, 0.0, w, h),
        ShapeKind::Line => {
            let [from, to] = line_endpoints(desc);
            b.move_to(from);
            b.line_to(to);
        }
        ShapeKind::Brush => {
            if desc.points.is_empty() {
                return Err(PathError::DegenerateOutline { min: 1 });
            }
            b.polyline(&desc.points);
        }
        ShapeKind::Triangle => b.polygon(&triangle_points(w, h)),
        ShapeKind::Polygon => b.polygon(&polygon_points(desc)),
        kind => {
            if let Some(cmds) = icons::scaled_commands(kind, w, h) {
                icons::write(&cmds, &mut b);
            }
        }
    }
    Ok(b.finish())
}

fn rounded_rect(b: &mut PathBuilder, w: f64, h: f64, r: f64) {
    b.move_to(Point::new(r, 0.0));
    b.line_to(Point::new(w - r, 0.0));
    b.arc_to(r, r, false, true, Point::new(w, r));
    b.line_to(Point::new(w, h - r));
    b.arc_to(r, r, false, true, Point::new(w - r, h));
    b.line_to(Point::new(r, h));
    b.arc_to(r, r, false, true, Point::new(0.0, h - r));
    b.line_to(Point::new(0.0, r));
    b.arc_to(r, r, false, true, Point::new(r, 0.0));
    b.close();
}
