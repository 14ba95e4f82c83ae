#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in box-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation toward `other` at parameter `t`.
    #[must_use]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: (other.x - self.x).mul_add(t, self.x),
            y: (other.y - self.y).mul_add(t, self.y),
        }
    }

    /// Offset along the vector `(dx, dy)` scaled by `amount`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64, amount: f64) -> Point {
        Point {
            x: dx.mul_add(amount, self.x),
            y: dy.mul_add(amount, self.y),
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp both dimensions to at least `min`.
    #[must_use]
    pub fn at_least(self, min: f64) -> Size {
        Size {
            width: self.width.max(min),
            height: self.height.max(min),
        }
    }
}

/// An axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Unit normal (the direction rotated 90° clockwise on screen, where y grows downward)
/// of the direction `from → to`. Returns `(0, 0)` for coincident points.
#[must_use]
pub fn unit_normal(from: Point, to: Point) -> (f64, f64) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = dx.hypot(dy);
    if len <= f64::EPSILON {
        return (0.0, 0.0);
    }
    (-dy / len, dx / len)
}
