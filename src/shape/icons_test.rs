#![allow(clippy::float_cmp)]

use super::*;

const ICONS: [ShapeKind; 8] = [
    ShapeKind::Heart,
    ShapeKind::Star,
    ShapeKind::SpeechBubble,
    ShapeKind::Cloud,
    ShapeKind::Flower,
    ShapeKind::Cat,
    ShapeKind::Dog,
    ShapeKind::Smiley,
];

fn points_of(cmds: &[IconCmd]) -> Vec<Point> {
    let mut out = Vec::new();
    for cmd in cmds {
        let _ = cmd.map(|q| {
            out.push(q);
            q
        });
    }
    out
}

// =============================================================
// unit_commands
// =============================================================

#[test]
fn every_icon_starts_with_a_move() {
    for kind in ICONS {
        let cmds = unit_commands(kind).unwrap_or_default();
        assert!(matches!(cmds.first(), Some(IconCmd::Move(_))), "{kind:?}");
    }
}

#[test]
fn icons_stay_inside_the_unit_box() {
    for kind in ICONS {
        let cmds = unit_commands(kind).unwrap_or_default();
        for q in points_of(&cmds) {
            assert!((-1e-9..=1.0 + 1e-9).contains(&q.x), "{kind:?} x={}", q.x);
            assert!((-1e-9..=1.0 + 1e-9).contains(&q.y), "{kind:?} y={}", q.y);
        }
    }
}

#[test]
fn geometric_kinds_have_no_icon() {
    for kind in [ShapeKind::Rect, ShapeKind::Circle, ShapeKind::Line, ShapeKind::Brush, ShapeKind::Polygon] {
        assert!(unit_commands(kind).is_none());
    }
}

#[test]
fn star_has_ten_vertices_with_top_point_centered() {
    let cmds = unit_commands(ShapeKind::Star).unwrap_or_default();
    assert_eq!(cmds.len(), 11);
    let Some(IconCmd::Move(top)) = cmds.first() else {
        panic!("star must start with a move");
    };
    assert!((top.x - 0.5).abs() < 1e-9);
    assert!(top.y.abs() < 1e-9);
}

// =============================================================
// scaled_commands / write
// =============================================================

#[test]
fn scaling_stretches_points_and_arc_radii() {
    let cmds = scaled_commands(ShapeKind::Smiley, 200.0, 100.0).unwrap_or_default();
    let Some(IconCmd::Arc { rx, ry, to, .. }) = cmds.get(1) else {
        panic!("smiley face should begin with an arc");
    };
    assert_eq!(*rx, 100.0);
    assert_eq!(*ry, 50.0);
    assert_eq!(*to, Point::new(200.0, 50.0));
}

#[test]
fn written_heart_is_a_closed_cubic_path() {
    let cmds = scaled_commands(ShapeKind::Heart, 100.0, 100.0).unwrap_or_default();
    let mut b = PathBuilder::new();
    write(&cmds, &mut b);
    let d = b.finish();
    assert!(d.starts_with("M 50 28 C"));
    assert_eq!(d.matches('C').count(), 6);
    assert!(d.ends_with('Z'));
}
