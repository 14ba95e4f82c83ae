use super::*;

#[test]
fn fmt_num_rounds_to_two_decimals() {
    assert_eq!(fmt_num(1.0), "1");
    assert_eq!(fmt_num(1.234), "1.23");
    assert_eq!(fmt_num(1.235_1), "1.24");
    assert_eq!(fmt_num(-2.5), "-2.5");
    assert_eq!(fmt_num(0.1 + 0.2), "0.3");
}

#[test]
fn fmt_num_folds_negative_zero() {
    assert_eq!(fmt_num(-0.0), "0");
    assert_eq!(fmt_num(-0.001), "0");
}

#[test]
fn builder_joins_commands_with_spaces() {
    let mut b = PathBuilder::new();
    b.move_to(Point::new(0.0, 0.0));
    b.line_to(Point::new(10.0, 0.5));
    b.close();
    assert_eq!(b.finish(), "M 0 0 L 10 0.5 Z");
}

#[test]
fn empty_builder_finishes_empty() {
    let b = PathBuilder::new();
    assert!(b.is_empty());
    assert_eq!(b.finish(), "");
}

#[test]
fn ellipse_is_two_arcs() {
    let mut b = PathBuilder::new();
    b.ellipse(0.0, 0.0, 100.0, 50.0);
    assert_eq!(b.finish(), "M 0 25 A 50 25 0 1 0 100 25 A 50 25 0 1 0 0 25 Z");
}

#[test]
fn circle_centers_on_point() {
    let mut b = PathBuilder::new();
    b.circle(Point::new(10.0, 10.0), 2.0);
    assert_eq!(b.finish(), "M 8 10 A 2 2 0 1 0 12 10 A 2 2 0 1 0 8 10 Z");
}

#[test]
fn polygon_closes_and_ignores_empty() {
    let mut b = PathBuilder::new();
    b.polygon(&[]);
    assert!(b.is_empty());
    b.polygon(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)]);
    assert_eq!(b.finish(), "M 0 0 L 1 0 L 1 1 Z");
}

#[test]
fn smooth_open_curve_passes_through_endpoints() {
    let mut b = PathBuilder::new();
    b.smooth(&[Point::new(0.0, 0.0), Point::new(6.0, 0.0), Point::new(12.0, 0.0)], false);
    let d = b.finish();
    assert!(d.starts_with("M 0 0 C"));
    assert!(d.ends_with("12 0"));
    assert_eq!(d.matches('C').count(), 2);
}

#[test]
fn smooth_closed_curve_wraps() {
    let mut b = PathBuilder::new();
    let pts = [Point::new(0.0, 0.0), Point::new(6.0, 0.0), Point::new(6.0, 6.0), Point::new(0.0, 6.0)];
    b.smooth(&pts, true);
    let d = b.finish();
    assert_eq!(d.matches('C').count(), 4);
    assert!(d.ends_with('Z'));
}

#[test]
fn append_concatenates_subpaths() {
    let mut a = PathBuilder::new();
    a.move_to(Point::new(0.0, 0.0));
    let mut b = PathBuilder::new();
    b.move_to(Point::new(1.0, 1.0));
    a.append(b);
    a.append(PathBuilder::new());
    assert_eq!(a.finish(), "M 0 0 M 1 1");
}
