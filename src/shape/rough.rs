//! Rough theme: seeded hand-drawn strokes.
//!
//! Every straight edge is drawn twice as a slightly bent cubic whose ends and
//! control points are jittered. Polygonal outlines are preceded by one
//! jittered closed polygon so the fill covers the interior. Curved outlines are resampled into a few
//! control points, jittered, and redrawn as two smooth closed curves. Icons
//! keep their commands with every coordinate jittered.

use crate::consts::DEFAULT_ROUGHNESS;
use crate::geom::Point;

use super::exact::check_finite;
use super::icons::{self, IconCmd};
use super::outline::{Outline, clamp_radius, line_endpoints, polygon_points, triangle_points};
use super::path::PathBuilder;
use super::seed::Jitter;
use super::{GenContext, LineCap, LineJoin, PathError, ShapeDescriptor, ShapeKind, StrokeProps, Theme, ThemeStrategy, supports_all};

pub(super) static STRATEGY: ThemeStrategy = ThemeStrategy {
    theme: Theme::Rough,
    supports: supports_all,
    generate: path,
    props,
};

/// Passes drawn over every edge.
const PASSES: usize = 2;

/// Arc length between control points of a roughened curve.
const CURVE_CONTROL_SPACING: f64 = 40.0;
const MIN_CURVE_CONTROLS: usize = 8;
const MAX_CURVE_CONTROLS: usize = 32;

fn props(desc: &ShapeDescriptor, ctx: &GenContext<'_>) -> StrokeProps {
    StrokeProps { line_cap: LineCap::Round, line_join: LineJoin::Round, ..ctx.base_props(desc) }
}

struct Rougher {
    jitter: Jitter,
    roughness: f64,
    max_offset: f64,
    offset_ratio: f64,
}

impl Rougher {
    fn new(desc: &ShapeDescriptor, ctx: &GenContext<'_>) -> Self {
        let roughness = desc
            .roughness
            .filter(|r| r.is_finite())
            .unwrap_or(DEFAULT_ROUGHNESS)
            .max(0.0);
        Self {
            jitter: Jitter::new(ctx.seed),
            roughness,
            max_offset: ctx.config.rough.max_offset,
            offset_ratio: ctx.config.rough.offset_ratio,
        }
    }

    /// Jitter amplitude for a feature of size `len`.
    fn amplitude(&self, len: f64) -> f64 {
        self.roughness * self.max_offset.min(len.mul_add(self.offset_ratio, 0.5))
    }

    fn edge(&mut self, b: &mut PathBuilder, from: Point, to: Point) {
        let amp = self.amplitude(from.distance(to));
        for _ in 0..PASSES {
            let start = self.jitter.point(from, amp);
            let end = self.jitter.point(to, amp);
            let c1 = self.jitter.point(from.lerp(to, 0.35), amp);
            let c2 = self.jitter.point(from.lerp(to, 0.7), amp);
            b.move_to(start);
            b.cubic_to(c1, c2, end);
        }
    }

    /// Closed jittered polygon through `points`, the region filled under the edges.
    fn fill_region(&mut self, b: &mut PathBuilder, points: &[Point], size: f64) {
        let amp = self.amplitude(size);
        let jittered: Vec<Point> = points.iter().map(|p| self.jitter.point(*p, amp)).collect();
        b.polygon(&jittered);
    }

    fn closed_edges(&mut self, b: &mut PathBuilder, points: &[Point]) {
        for (i, from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.edge(b, *from, to);
        }
    }

    fn curve(&mut self, b: &mut PathBuilder, outline: &Outline, size: f64) {
        let len = outline.length();
        let raw = (len / CURVE_CONTROL_SPACING).ceil();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = if raw.is_finite() && raw > 0.0 { raw as usize } else { 0 };
        let count = count.clamp(MIN_CURVE_CONTROLS, MAX_CURVE_CONTROLS);
        let controls: Vec<Point> = outline.resample(count).into_iter().map(|s| s.point).collect();
        let amp = self.amplitude(size);
        for _ in 0..PASSES {
            let jittered: Vec<Point> = controls.iter().map(|p| self.jitter.point(*p, amp)).collect();
            b.smooth(&jittered, true);
        }
    }

    fn brush(&mut self, b: &mut PathBuilder, points: &[Point]) {
        let amp = self.amplitude(0.0);
        for _ in 0..PASSES {
            let jittered: Vec<Point> = points.iter().map(|p| self.jitter.point(*p, amp)).collect();
            b.polyline(&jittered);
        }
    }

    fn icon(&mut self, b: &mut PathBuilder, cmds: &[IconCmd], size: f64) {
        let amp = self.amplitude(size);
        for _ in 0..PASSES {
            let jittered: Vec<IconCmd> = cmds.iter().map(|cmd| cmd.map(|p| self.jitter.point(p, amp))).collect();
            icons::write(&jittered, b);
        }
    }
}

fn path(desc: &ShapeDescriptor, ctx: &GenContext<'_>) -> Result<String, PathError> {
    check_finite(desc)?;
    let (w, h) = (desc.width, desc.height);
    let size = w.abs().min(h.abs());
    let mut rough = Rougher::new(desc, ctx);
    let mut fill = PathBuilder::new();
    let mut b = PathBuilder::new();
    match desc.kind {
        ShapeKind::Rect if clamp_radius(desc.corner_radius.unwrap_or(0.0), w, h) > 0.0 => {
            let outline = Outline::for_shape(desc, Theme::Rough.as_str(), ctx.zoom)?;
            rough.curve(&mut b, &outline, size);
        }
        ShapeKind::Rect => {
            let corners = [Point::new(0.0, 0.0), Point::new(w, 0.0), Point::new(w, h), Point::new(0.0, h)];
            rough.fill_region(&mut fill, &corners, size);
            rough.closed_edges(&mut b, &corners);
        }
        ShapeKind::Circle => {
            let outline = Outline::for_shape(desc, Theme::Rough.as_str(), ctx.zoom)?;
            rough.curve(&mut b, &outline, size);
        }
        ShapeKind::Line => {
            let [from, to] = line_endpoints(desc);
            rough.edge(&mut b, from, to);
        }
        ShapeKind::Brush => {
            if desc.points.len() < 2 {
                return Err(PathError::DegenerateOutline { min: 2 });
            }
            rough.brush(&mut b, &desc.points);
        }
        ShapeKind::Triangle | ShapeKind::Polygon => {
            let corners = if desc.kind == ShapeKind::Triangle { triangle_points(w, h) } else { polygon_points(desc) };
            rough.fill_region(&mut fill, &corners, size);
            rough.closed_edges(&mut b, &corners);
        }
        kind => {
            if let Some(cmds) = icons::scaled_commands(kind, w, h) {
                rough.icon(&mut b, &cmds, size);
            }
        }
    }
    fill.append(b);
    Ok(fill.finish())
}
