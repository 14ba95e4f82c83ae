//! Zigzag theme: the outline resampled into teeth that alternate across the border.

use super::exact::check_finite;
use super::outline::Outline;
use super::path::PathBuilder;
use super::{
    GenContext, LineCap, LineJoin, PathError, ShapeDescriptor, StrokeProps, Theme, ThemeStrategy, supports_outlined,
};
use crate::geom::Point;

pub(super) static STRATEGY: ThemeStrategy = ThemeStrategy {
    theme: Theme::Zigzag,
    supports: supports_outlined,
    generate: path,
    props,
};

/// Upper bound on zigzag vertices per shape.
const MAX_POINTS: usize = 8192;

fn props(desc: &ShapeDescriptor, ctx: &GenContext<'_>) -> StrokeProps {
    StrokeProps { line_cap: LineCap::Butt, line_join: LineJoin::Miter, ..ctx.base_props(desc) }
}

/// Tooth length and displacement for `desc`.
fn tooth(desc: &ShapeDescriptor, ctx: &GenContext<'_>) -> (f64, f64) {
    let zigzag = &ctx.config.zigzag;
    let width = ctx.stroke_width(desc);
    let size = desc
        .zigzag_size
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or_else(|| (zigzag.size_ratio * width).max(zigzag.min_size));
    let thickness = desc
        .zigzag_thickness
        .filter(|t| t.is_finite() && *t >= 0.0)
        .unwrap_or(zigzag.thickness_ratio * width);
    (size, thickness)
}

/// Vertex count for an outline of length `length`.
///
/// At least two; closed outlines round up to an even count (at least four)
/// so the alternation wraps cleanly.
pub(super) fn point_count(length: f64, size: f64, closed: bool) -> usize {
    let raw = (length / size).ceil();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = if raw.is_finite() && raw > 0.0 { raw as usize } else { 0 };
    let n = n.clamp(2, MAX_POINTS);
    if closed { (n + n % 2).max(4) } else { n }
}

fn path(desc: &ShapeDescriptor, ctx: &GenContext<'_>) -> Result<String, PathError> {
    check_finite(desc)?;
    let outline = Outline::for_shape(desc, Theme::Zigzag.as_str(), ctx.zoom)?;
    let (size, thickness) = tooth(desc, ctx);
    let n = point_count(outline.length(), size, outline.closed);
    let sign = if outline.closed { outline.outward_sign() } else { 1.0 };
    // Open outlines keep both endpoints: n teeth need n + 1 vertices.
    let samples = outline.resample(if outline.closed { n } else { n + 1 });
    let points: Vec<Point> = samples
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if i % 2 == 1 {
                s.point.offset(s.normal.0, s.normal.1, sign * thickness)
            } else {
                s.point
            }
        })
        .collect();
    let mut b = PathBuilder::new();
    if outline.closed {
        b.polygon(&points);
    } else {
        b.polyline(&points);
    }
    Ok(b.finish())
}
