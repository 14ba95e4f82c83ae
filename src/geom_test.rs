#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Point ---

#[test]
fn point_distance() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert!(approx_eq(a.distance(b), 5.0));
}

#[test]
fn point_lerp_midpoint() {
    let mid = Point::new(0.0, 10.0).lerp(Point::new(10.0, 20.0), 0.5);
    assert!(approx_eq(mid.x, 5.0));
    assert!(approx_eq(mid.y, 15.0));
}

#[test]
fn point_offset_scales_vector() {
    let p = Point::new(1.0, 1.0).offset(0.0, 1.0, 3.0);
    assert_eq!(p, Point::new(1.0, 4.0));
}

#[test]
fn point_is_finite_rejects_nan() {
    assert!(Point::new(1.0, 2.0).is_finite());
    assert!(!Point::new(f64::NAN, 2.0).is_finite());
    assert!(!Point::new(1.0, f64::INFINITY).is_finite());
}

// --- Size / Rect ---

#[test]
fn size_at_least_clamps_each_dimension() {
    let s = Size::new(-5.0, 20.0).at_least(1.0);
    assert_eq!(s, Size::new(1.0, 20.0));
}

#[test]
fn rect_edges() {
    let r = Rect::new(10.0, 20.0, 30.0, 40.0);
    assert_eq!(r.right(), 40.0);
    assert_eq!(r.bottom(), 60.0);
    assert_eq!(r.size(), Size::new(30.0, 40.0));
}

// --- unit_normal ---

#[test]
fn unit_normal_of_horizontal_segment_points_down_on_screen() {
    let (nx, ny) = unit_normal(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert!(approx_eq(nx, 0.0));
    assert!(approx_eq(ny, 1.0));
}

#[test]
fn unit_normal_of_degenerate_segment_is_zero() {
    let p = Point::new(3.0, 3.0);
    assert_eq!(unit_normal(p, p), (0.0, 0.0));
}
