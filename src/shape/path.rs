//! SVG path string builder with stable number formatting.
//!
//! Coordinates are rounded to [`PATH_PRECISION`] decimals and printed in
//! their shortest form, so the same geometry always serializes to the same
//! bytes.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use crate::consts::PATH_PRECISION;
use crate::geom::Point;

/// Format a coordinate for path output.
#[must_use]
pub fn fmt_num(value: f64) -> String {
    let scale = 10f64.powi(PATH_PRECISION);
    let rounded = (value * scale).round() / scale;
    if rounded.abs() < f64::EPSILON {
        // Also folds -0 into 0.
        return "0".to_owned();
    }
    format!("{rounded}")
}

/// Incrementally builds an SVG path `d` string.
#[derive(Debug, Default)]
pub struct PathBuilder {
    out: String,
}

impl PathBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn command(&mut self, cmd: char, values: &[f64]) {
        if !self.out.is_empty() {
            self.out.push(' ');
        }
        self.out.push(cmd);
        for v in values {
            self.out.push(' ');
            self.out.push_str(&fmt_num(*v));
        }
    }

    pub fn move_to(&mut self, p: Point) {
        self.command('M', &[p.x, p.y]);
    }

    pub fn line_to(&mut self, p: Point) {
        self.command('L', &[p.x, p.y]);
    }

    pub fn quad_to(&mut self, c: Point, p: Point) {
        self.command('Q', &[c.x, c.y, p.x, p.y]);
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.command('C', &[c1.x, c1.y, c2.x, c2.y, p.x, p.y]);
    }

    pub fn arc_to(&mut self, rx: f64, ry: f64, large_arc: bool, sweep: bool, p: Point) {
        let large = if large_arc { 1.0 } else { 0.0 };
        let sweep = if sweep { 1.0 } else { 0.0 };
        self.command('A', &[rx, ry, 0.0, large, sweep, p.x, p.y]);
    }

    pub fn close(&mut self) {
        self.command('Z', &[]);
    }

    /// Open polyline through `points`.
    pub fn polyline(&mut self, points: &[Point]) {
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            self.move_to(*first);
        }
        for p in iter {
            self.line_to(*p);
        }
    }

    /// Closed polygon through `points`.
    pub fn polygon(&mut self, points: &[Point]) {
        if points.is_empty() {
            return;
        }
        self.polyline(points);
        self.close();
    }

    /// Full ellipse inscribed in the box at `(x, y)` of size `w × h`, as two arcs.
    pub fn ellipse(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let rx = w.abs() / 2.0;
        let ry = h.abs() / 2.0;
        let cy = y + h / 2.0;
        self.move_to(Point::new(x, cy));
        self.arc_to(rx, ry, true, false, Point::new(x + w, cy));
        self.arc_to(rx, ry, true, false, Point::new(x, cy));
        self.close();
    }

    /// Circle of radius `r` centered at `c`.
    pub fn circle(&mut self, c: Point, r: f64) {
        self.ellipse(c.x - r, c.y - r, 2.0 * r, 2.0 * r);
    }

    /// Smooth curve through `points` (Catmull-Rom converted to cubic segments).
    ///
    /// When `closed` the curve wraps from the last point back to the first.
    pub fn smooth(&mut self, points: &[Point], closed: bool) {
        let n = points.len();
        if n < 2 {
            self.polyline(points);
            return;
        }
        self.move_to(points[0]);
        let segments = if closed { n } else { n - 1 };
        for i in 0..segments {
            let p1 = points[i];
            let p2 = points[(i + 1) % n];
            let p0 = match (i, closed) {
                (0, true) => points[n - 1],
                (0, false) => p1,
                _ => points[i - 1],
            };
            let p3 = if i + 2 < n || closed { points[(i + 2) % n] } else { p2 };
            let c1 = Point::new(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0);
            let c2 = Point::new(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0);
            self.cubic_to(c1, c2, p2);
        }
        if closed {
            self.close();
        }
    }

    /// Append another builder's commands.
    pub fn append(&mut self, other: PathBuilder) {
        if other.is_empty() {
            return;
        }
        if !self.is_empty() {
            self.out.push(' ');
        }
        self.out.push_str(&other.out);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }
}
