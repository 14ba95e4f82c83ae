//! Flattened shape outlines and arc-length sampling.
//!
//! The candy, zigzag and wobbly themes all work on a polyline approximation
//! of the shape's border. [`Outline::for_shape`] builds it; curves (ellipses,
//! rounded corners) are flattened with a segment count that grows with the
//! on-screen size so zoomed-in shapes stay smooth.

#[cfg(test)]
#[path = "outline_test.rs"]
mod outline_test;

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::consts::{
    DEFAULT_POLYGON_SIDES, FLATTEN_STEP_PX, MAX_ELLIPSE_SEGMENTS, MAX_POLYGON_SIDES, MIN_ELLIPSE_SEGMENTS,
};
use crate::geom::{Point, unit_normal};

use super::{PathError, ShapeDescriptor, ShapeKind};

/// A sample on an outline: position plus the unit normal of the segment it lies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub point: Point,
    pub normal: (f64, f64),
}

/// Polyline approximation of a shape border.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub points: Vec<Point>,
    pub closed: bool,
    /// Arc-length positions of true corners. Empty for smooth outlines.
    pub corners: Vec<f64>,
}

impl Outline {
    /// Outline of `desc` for themes that trace the border.
    ///
    /// # Errors
    ///
    /// [`PathError::UnsupportedForTheme`] for decorative icons (they have no
    /// sampled outline) and [`PathError::DegenerateOutline`] for brushes with fewer
    /// than two points.
    pub fn for_shape(desc: &ShapeDescriptor, theme: &'static str, zoom: f64) -> Result<Outline, PathError> {
        let w = desc.width;
        let h = desc.height;
        match desc.kind {
            ShapeKind::Rect => {
                let radius = clamp_radius(desc.corner_radius.unwrap_or(0.0), w, h);
                if radius > 0.0 {
                    Ok(Self::smooth(rounded_rect_points(w, h, radius, zoom)))
                } else {
                    Ok(Self::polygon(vec![
                        Point::new(0.0, 0.0),
                        Point::new(w, 0.0),
                        Point::new(w, h),
                        Point::new(0.0, h),
                    ]))
                }
            }
            ShapeKind::Circle => Ok(Self::smooth(ellipse_points(w / 2.0, h / 2.0, w / 2.0, h / 2.0, zoom))),
            ShapeKind::Triangle => Ok(Self::polygon(triangle_points(w, h))),
            ShapeKind::Polygon => Ok(Self::polygon(polygon_points(desc))),
            ShapeKind::Line => Ok(Self::open(line_endpoints(desc).to_vec())),
            ShapeKind::Brush => {
                if desc.points.len() < 2 {
                    return Err(PathError::DegenerateOutline { min: 2 });
                }
                Ok(Self::open(desc.points.clone()))
            }
            kind => Err(PathError::UnsupportedForTheme { theme, kind: kind.as_str() }),
        }
    }

    #[must_use]
    pub fn open(points: Vec<Point>) -> Self {
        Self { points, closed: false, corners: Vec::new() }
    }

    /// Closed outline whose vertices are all corners.
    #[must_use]
    pub fn polygon(points: Vec<Point>) -> Self {
        let mut outline = Self { points, closed: true, corners: Vec::new() };
        outline.corners = outline.cumulative()[..outline.points.len()].to_vec();
        outline
    }

    /// Closed outline with no corners.
    #[must_use]
    pub fn smooth(points: Vec<Point>) -> Self {
        Self { points, closed: true, corners: Vec::new() }
    }

    /// Segments in drawing order, including the closing segment of closed outlines.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        let count = match (self.closed, n) {
            (_, 0 | 1) => 0,
            (true, _) => n,
            (false, _) => n - 1,
        };
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Arc-length position of every vertex, plus the total length as the last entry.
    #[must_use]
    pub fn cumulative(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.points.len() + 1);
        let mut acc = 0.0;
        out.push(0.0);
        for (a, b) in self.segments() {
            acc += a.distance(b);
            out.push(acc);
        }
        out.resize(self.points.len() + 1, acc);
        out
    }

    /// Total length, including the closing segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    /// Sample at arc-length `distance` (wrapped for closed outlines, clamped otherwise).
    #[must_use]
    pub fn sample_at(&self, distance: f64) -> Option<Sample> {
        let total = self.length();
        let first = *self.points.first()?;
        if total <= 0.0 {
            return Some(Sample { point: first, normal: (0.0, 0.0) });
        }
        let mut d = if self.closed { distance.rem_euclid(total) } else { distance.clamp(0.0, total) };
        let mut last = None;
        for (a, b) in self.segments() {
            let len = a.distance(b);
            if len <= 0.0 {
                continue;
            }
            if d <= len {
                return Some(Sample { point: a.lerp(b, d / len), normal: unit_normal(a, b) });
            }
            d -= len;
            last = Some((a, b));
        }
        last.map(|(a, b)| Sample { point: b, normal: unit_normal(a, b) })
    }

    /// `count` samples at even arc-length intervals.
    ///
    /// Open outlines include both endpoints; closed outlines start at the
    /// first vertex and stop one interval short of it.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn resample(&self, count: usize) -> Vec<Sample> {
        let total = self.length();
        let step = match (self.closed, count) {
            (_, 0) => return Vec::new(),
            (false, 1) => 0.0,
            (false, n) => total / (n - 1) as f64,
            (true, n) => total / n as f64,
        };
        (0..count).filter_map(|i| self.sample_at(step * i as f64)).collect()
    }

    /// Points between arc-length `start` and `end`, including both ends.
    ///
    /// On closed outlines the range may extend past either end and wraps.
    #[must_use]
    pub fn slice(&self, start: f64, end: f64) -> Vec<Point> {
        let total = self.length();
        let mut out = Vec::new();
        let Some(first) = self.sample_at(start) else {
            return out;
        };
        out.push(first.point);
        if total > 0.0 {
            let cumulative = self.cumulative();
            let laps: &[f64] = if self.closed { &[-1.0, 0.0, 1.0] } else { &[0.0] };
            for lap in laps {
                for (i, d) in cumulative.iter().enumerate().take(self.points.len()) {
                    let d = d + lap * total;
                    if d > start && d < end {
                        out.push(self.points[i]);
                    }
                }
            }
        }
        if let Some(last) = self.sample_at(end) {
            out.push(last.point);
        }
        out
    }

    /// Signed area (shoelace). Positive when the outline runs clockwise on screen.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        self.segments().map(|(a, b)| a.x * b.y - b.x * a.y).sum::<f64>() / 2.0
    }

    /// Multiplier turning segment normals into outward normals (`±1`).
    #[must_use]
    pub fn outward_sign(&self) -> f64 {
        if self.signed_area() > 0.0 { -1.0 } else { 1.0 }
    }
}

/// Corner radius limited to half the shorter side.
#[must_use]
pub fn clamp_radius(radius: f64, w: f64, h: f64) -> f64 {
    radius.max(0.0).min(w.abs() / 2.0).min(h.abs() / 2.0)
}

/// Segment count for flattening a curve of length `length` at `zoom`.
#[must_use]
pub fn segments_for(length: f64, zoom: f64) -> usize {
    let raw = (length * zoom / FLATTEN_STEP_PX).ceil();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = if raw.is_finite() && raw > 0.0 { raw as usize } else { 0 };
    n.clamp(MIN_ELLIPSE_SEGMENTS, MAX_ELLIPSE_SEGMENTS)
}

/// Ramanujan's approximation of an ellipse perimeter.
#[must_use]
pub fn ellipse_perimeter(rx: f64, ry: f64) -> f64 {
    let (a, b) = (rx.abs(), ry.abs());
    PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
}

/// Point on the ellipse centered at `(cx, cy)` at angle `t`.
#[must_use]
pub fn ellipse_point(cx: f64, cy: f64, rx: f64, ry: f64, t: f64) -> Point {
    Point::new(rx.mul_add(t.cos(), cx), ry.mul_add(t.sin(), cy))
}

/// Flattened ellipse, starting at angle 0 and running clockwise on screen.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ellipse_points(cx: f64, cy: f64, rx: f64, ry: f64, zoom: f64) -> Vec<Point> {
    let n = segments_for(ellipse_perimeter(rx, ry), zoom);
    (0..n)
        .map(|i| ellipse_point(cx, cy, rx, ry, TAU * i as f64 / n as f64))
        .collect()
}

/// Flattened rounded rectangle, starting at the end of the top-left corner.
#[must_use]
pub fn rounded_rect_points(w: f64, h: f64, r: f64, zoom: f64) -> Vec<Point> {
    let per_corner = (segments_for(FRAC_PI_2 * r, zoom) / 4).max(2);
    // Corner centers and their starting angles, clockwise from top-right.
    let corners = [
        (w - r, r, -FRAC_PI_2),
        (w - r, h - r, 0.0),
        (r, h - r, FRAC_PI_2),
        (r, r, PI),
    ];
    let mut out = Vec::with_capacity(corners.len() * (per_corner + 1));
    for (cx, cy, start) in corners {
        for i in 0..=per_corner {
            #[allow(clippy::cast_precision_loss)]
            let t = start + FRAC_PI_2 * i as f64 / per_corner as f64;
            out.push(ellipse_point(cx, cy, r, r, t));
        }
    }
    out
}

/// Isosceles triangle with its apex centered on the top edge.
#[must_use]
pub fn triangle_points(w: f64, h: f64) -> Vec<Point> {
    vec![Point::new(w / 2.0, 0.0), Point::new(w, h), Point::new(0.0, h)]
}

/// Explicit polygon points, or a regular polygon inscribed in the box.
#[must_use]
pub fn polygon_points(desc: &ShapeDescriptor) -> Vec<Point> {
    if desc.points.len() >= 3 {
        return desc.points.clone();
    }
    let sides = desc.sides.unwrap_or(DEFAULT_POLYGON_SIDES).clamp(3, MAX_POLYGON_SIDES);
    let (rx, ry) = (desc.width / 2.0, desc.height / 2.0);
    (0..sides)
        .map(|i| {
            let t = TAU * f64::from(i) / f64::from(sides) - FRAC_PI_2;
            ellipse_point(rx, ry, rx, ry, t)
        })
        .collect()
}

/// Endpoints of a straight line: the first and last explicit points, or the
/// box diagonal.
#[must_use]
pub fn line_endpoints(desc: &ShapeDescriptor) -> [Point; 2] {
    match (desc.points.first(), desc.points.last()) {
        (Some(a), Some(b)) if desc.points.len() >= 2 => [*a, *b],
        _ => [Point::new(0.0, 0.0), Point::new(desc.width, desc.height)],
    }
}
