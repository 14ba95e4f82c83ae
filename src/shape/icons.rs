//! Decorative icon geometry.
//!
//! Icons are authored in a unit box (`0..1` on both axes) and scaled to the
//! descriptor's width and height when emitted. The star is a ten-vertex
//! polygon alternating outer and inner radii; every other icon is a fixed
//! list of path commands.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::consts::{FRAC_PI_5, STAR_INNER_RATIO};
use crate::geom::Point;

use super::ShapeKind;
use super::path::PathBuilder;

/// One path command with absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconCmd {
    Move(Point),
    Line(Point),
    Quad(Point, Point),
    Cubic(Point, Point, Point),
    Arc { rx: f64, ry: f64, large: bool, sweep: bool, to: Point },
    Close,
}

impl IconCmd {
    /// Apply `f` to every coordinate point, leaving arc radii untouched.
    #[must_use]
    pub fn map(self, mut f: impl FnMut(Point) -> Point) -> IconCmd {
        match self {
            IconCmd::Move(p) => IconCmd::Move(f(p)),
            IconCmd::Line(p) => IconCmd::Line(f(p)),
            IconCmd::Quad(c, p) => IconCmd::Quad(f(c), f(p)),
            IconCmd::Cubic(c1, c2, p) => IconCmd::Cubic(f(c1), f(c2), f(p)),
            IconCmd::Arc { rx, ry, large, sweep, to } => IconCmd::Arc { rx, ry, large, sweep, to: f(to) },
            IconCmd::Close => IconCmd::Close,
        }
    }
}

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Full circle as a closed subpath of two arcs.
fn dot(out: &mut Vec<IconCmd>, cx: f64, cy: f64, r: f64) {
    out.push(IconCmd::Move(p(cx - r, cy)));
    out.push(IconCmd::Arc { rx: r, ry: r, large: true, sweep: false, to: p(cx + r, cy) });
    out.push(IconCmd::Arc { rx: r, ry: r, large: true, sweep: false, to: p(cx - r, cy) });
    out.push(IconCmd::Close);
}

fn heart() -> Vec<IconCmd> {
    vec![
        IconCmd::Move(p(0.5, 0.28)),
        IconCmd::Cubic(p(0.5, 0.12), p(0.32, 0.0), p(0.18, 0.05)),
        IconCmd::Cubic(p(0.02, 0.1), p(0.0, 0.32), p(0.1, 0.5)),
        IconCmd::Cubic(p(0.2, 0.66), p(0.4, 0.8), p(0.5, 0.95)),
        IconCmd::Cubic(p(0.6, 0.8), p(0.8, 0.66), p(0.9, 0.5)),
        IconCmd::Cubic(p(1.0, 0.32), p(0.98, 0.1), p(0.82, 0.05)),
        IconCmd::Cubic(p(0.68, 0.0), p(0.5, 0.12), p(0.5, 0.28)),
        IconCmd::Close,
    ]
}

fn star() -> Vec<IconCmd> {
    let outer = 0.5;
    let inner = outer * STAR_INNER_RATIO;
    let mut out = Vec::with_capacity(11);
    for i in 0..10 {
        let angle = FRAC_PI_5.mul_add(f64::from(i), -FRAC_PI_2);
        let r = if i % 2 == 0 { outer } else { inner };
        let v = p(r.mul_add(angle.cos(), 0.5), r.mul_add(angle.sin(), 0.5));
        out.push(if i == 0 { IconCmd::Move(v) } else { IconCmd::Line(v) });
    }
    out.push(IconCmd::Close);
    out
}

fn speech_bubble() -> Vec<IconCmd> {
    vec![
        IconCmd::Move(p(0.1, 0.0)),
        IconCmd::Line(p(0.9, 0.0)),
        IconCmd::Quad(p(1.0, 0.0), p(1.0, 0.1)),
        IconCmd::Line(p(1.0, 0.65)),
        IconCmd::Quad(p(1.0, 0.75), p(0.9, 0.75)),
        IconCmd::Line(p(0.45, 0.75)),
        IconCmd::Line(p(0.2, 1.0)),
        IconCmd::Line(p(0.28, 0.75)),
        IconCmd::Line(p(0.1, 0.75)),
        IconCmd::Quad(p(0.0, 0.75), p(0.0, 0.65)),
        IconCmd::Line(p(0.0, 0.1)),
        IconCmd::Quad(p(0.0, 0.0), p(0.1, 0.0)),
        IconCmd::Close,
    ]
}

fn cloud() -> Vec<IconCmd> {
    let bump = |r: f64, to: Point| IconCmd::Arc { rx: r, ry: r, large: false, sweep: true, to };
    vec![
        IconCmd::Move(p(0.2, 0.85)),
        bump(0.18, p(0.18, 0.5)),
        bump(0.22, p(0.5, 0.25)),
        bump(0.2, p(0.82, 0.45)),
        bump(0.21, p(0.8, 0.85)),
        IconCmd::Close,
    ]
}

fn flower() -> Vec<IconCmd> {
    let mut out = Vec::with_capacity(24);
    for i in 0..5 {
        let angle = TAU * f64::from(i) / 5.0 - FRAC_PI_2;
        dot(&mut out, 0.28f64.mul_add(angle.cos(), 0.5), 0.28f64.mul_add(angle.sin(), 0.5), 0.2);
    }
    dot(&mut out, 0.5, 0.5, 0.14);
    out
}

fn cat() -> Vec<IconCmd> {
    let mut out = vec![
        IconCmd::Move(p(0.15, 0.35)),
        IconCmd::Line(p(0.2, 0.02)),
        IconCmd::Line(p(0.42, 0.22)),
        IconCmd::Quad(p(0.5, 0.2), p(0.58, 0.22)),
        IconCmd::Line(p(0.8, 0.02)),
        IconCmd::Line(p(0.85, 0.35)),
        IconCmd::Cubic(p(0.98, 0.55), p(0.92, 0.95), p(0.5, 0.95)),
        IconCmd::Cubic(p(0.08, 0.95), p(0.02, 0.55), p(0.15, 0.35)),
        IconCmd::Close,
    ];
    dot(&mut out, 0.35, 0.5, 0.05);
    dot(&mut out, 0.65, 0.5, 0.05);
    out.extend([
        IconCmd::Move(p(0.46, 0.64)),
        IconCmd::Line(p(0.54, 0.64)),
        IconCmd::Line(p(0.5, 0.69)),
        IconCmd::Close,
    ]);
    out
}

fn dog() -> Vec<IconCmd> {
    let mut out = vec![
        IconCmd::Move(p(0.3, 0.12)),
        IconCmd::Quad(p(0.5, 0.02), p(0.7, 0.12)),
        IconCmd::Cubic(p(0.85, 0.05), p(1.0, 0.2), p(0.95, 0.5)),
        IconCmd::Cubic(p(0.92, 0.62), p(0.85, 0.62), p(0.82, 0.52)),
        IconCmd::Cubic(p(0.85, 0.8), p(0.7, 0.95), p(0.5, 0.95)),
        IconCmd::Cubic(p(0.3, 0.95), p(0.15, 0.8), p(0.18, 0.52)),
        IconCmd::Cubic(p(0.15, 0.62), p(0.08, 0.62), p(0.05, 0.5)),
        IconCmd::Cubic(p(0.0, 0.2), p(0.15, 0.05), p(0.3, 0.12)),
        IconCmd::Close,
    ];
    dot(&mut out, 0.38, 0.45, 0.05);
    dot(&mut out, 0.62, 0.45, 0.05);
    out.extend([
        IconCmd::Move(p(0.43, 0.65)),
        IconCmd::Arc { rx: 0.07, ry: 0.05, large: true, sweep: false, to: p(0.57, 0.65) },
        IconCmd::Arc { rx: 0.07, ry: 0.05, large: true, sweep: false, to: p(0.43, 0.65) },
        IconCmd::Close,
    ]);
    out
}

fn smiley() -> Vec<IconCmd> {
    let mut out = Vec::with_capacity(16);
    dot(&mut out, 0.5, 0.5, 0.5);
    dot(&mut out, 0.36, 0.38, 0.06);
    dot(&mut out, 0.64, 0.38, 0.06);
    out.push(IconCmd::Move(p(0.28, 0.62)));
    out.push(IconCmd::Quad(p(0.5, 0.85), p(0.72, 0.62)));
    out
}

/// Unit-box commands for a decorative icon, or `None` for geometric kinds.
#[must_use]
pub fn unit_commands(kind: ShapeKind) -> Option<Vec<IconCmd>> {
    match kind {
        ShapeKind::Heart => Some(heart()),
        ShapeKind::Star => Some(star()),
        ShapeKind::SpeechBubble => Some(speech_bubble()),
        ShapeKind::Cloud => Some(cloud()),
        ShapeKind::Flower => Some(flower()),
        ShapeKind::Cat => Some(cat()),
        ShapeKind::Dog => Some(dog()),
        ShapeKind::Smiley => Some(smiley()),
        _ => None,
    }
}

/// Icon commands scaled to a `w × h` box.
#[must_use]
pub fn scaled_commands(kind: ShapeKind, w: f64, h: f64) -> Option<Vec<IconCmd>> {
    let cmds = unit_commands(kind)?;
    Some(
        cmds.into_iter()
            .map(|cmd| match cmd.map(|q| p(q.x * w, q.y * h)) {
                IconCmd::Arc { rx, ry, large, sweep, to } => IconCmd::Arc {
                    rx: rx * w.abs(),
                    ry: ry * h.abs(),
                    large,
                    sweep,
                    to,
                },
                other => other,
            })
            .collect(),
    )
}

/// Emit `cmds` into `builder`.
pub fn write(cmds: &[IconCmd], builder: &mut PathBuilder) {
    for cmd in cmds {
        match *cmd {
            IconCmd::Move(q) => builder.move_to(q),
            IconCmd::Line(q) => builder.line_to(q),
            IconCmd::Quad(c, q) => builder.quad_to(c, q),
            IconCmd::Cubic(c1, c2, q) => builder.cubic_to(c1, c2, q),
            IconCmd::Arc { rx, ry, large, sweep, to } => builder.arc_to(rx, ry, large, sweep, to),
            IconCmd::Close => builder.close(),
        }
    }
}
