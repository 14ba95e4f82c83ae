use super::*;

#[test]
fn seed_uses_first_eight_digits() {
    assert_eq!(seed_from_id("123456789"), 12_345_678);
    assert_eq!(seed_from_id("a1b2-c3d4-5678-9999"), 12_345_678);
}

#[test]
fn seed_with_fewer_digits_uses_what_is_there() {
    assert_eq!(seed_from_id("shape-42"), 42);
}

#[test]
fn seed_defaults_to_one() {
    assert_eq!(seed_from_id(""), 1);
    assert_eq!(seed_from_id("no-digits-here"), 1);
    assert_eq!(seed_from_id("000-000"), 1);
}

#[test]
fn seed_ignores_non_ascii_digits() {
    assert_eq!(seed_from_id("٣٤5"), 5);
}

#[test]
fn jitter_is_reproducible_for_same_seed() {
    let mut a = Jitter::new(77);
    let mut b = Jitter::new(77);
    let xs: Vec<f64> = (0..16).map(|_| a.unit()).collect();
    let ys: Vec<f64> = (0..16).map(|_| b.unit()).collect();
    assert_eq!(xs, ys);
}

#[test]
fn jitter_differs_between_seeds() {
    let xs: Vec<f64> = {
        let mut j = Jitter::new(1);
        (0..8).map(|_| j.unit()).collect()
    };
    let ys: Vec<f64> = {
        let mut j = Jitter::new(2);
        (0..8).map(|_| j.unit()).collect()
    };
    assert_ne!(xs, ys);
}

#[test]
fn signed_stays_within_amplitude() {
    let mut j = Jitter::new(9);
    for _ in 0..1000 {
        let v = j.signed(3.0);
        assert!((-3.0..3.0).contains(&v));
    }
}

#[test]
fn point_jitter_is_bounded() {
    let mut j = Jitter::new(5);
    let origin = Point::new(10.0, 10.0);
    for _ in 0..200 {
        let p = j.point(origin, 0.5);
        assert!((p.x - 10.0).abs() <= 0.5);
        assert!((p.y - 10.0).abs() <= 0.5);
    }
}
