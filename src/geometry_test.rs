#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- percent_of ---

#[test]
fn percent_of_maps_corners_and_center() {
    let rect = Rect::new(100.0, 50.0, 200.0, 100.0);
    assert_eq!(rect.percent_of(Point::new(100.0, 50.0)), Some(Point::new(0.0, 0.0)));
    assert_eq!(rect.percent_of(Point::new(300.0, 150.0)), Some(Point::new(100.0, 100.0)));
    assert_eq!(rect.percent_of(Point::new(200.0, 100.0)), Some(Point::new(50.0, 50.0)));
}

#[test]
fn percent_of_clamps_outside_pointer() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(rect.percent_of(Point::new(-20.0, 250.0)), Some(Point::new(0.0, 100.0)));
}

#[test]
fn percent_of_zero_size_is_none() {
    assert_eq!(Rect::new(0.0, 0.0, 0.0, 10.0).percent_of(Point::new(0.0, 0.0)), None);
    assert_eq!(Rect::new(0.0, 0.0, 10.0, 0.0).percent_of(Point::new(0.0, 0.0)), None);
}

// --- centered_offset ---

#[test]
fn centered_offset_is_zero_at_center() {
    let rect = Rect::new(10.0, 10.0, 40.0, 20.0);
    assert_eq!(rect.centered_offset(Point::new(30.0, 20.0)), Some(Point::new(0.0, 0.0)));
}

#[test]
fn centered_offset_is_unit_at_edges() {
    let rect = Rect::new(0.0, 0.0, 40.0, 20.0);
    let top_left = rect.centered_offset(Point::new(0.0, 0.0)).unwrap();
    assert!(approx_eq(top_left.x, -1.0));
    assert!(approx_eq(top_left.y, -1.0));
    let bottom_right = rect.centered_offset(Point::new(40.0, 20.0)).unwrap();
    assert!(approx_eq(bottom_right.x, 1.0));
    assert!(approx_eq(bottom_right.y, 1.0));
}

#[test]
fn centered_offset_is_not_clamped() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    let p = rect.centered_offset(Point::new(20.0, 5.0)).unwrap();
    assert!(approx_eq(p.x, 3.0));
}

// --- Ripple ---

#[test]
fn ripple_uses_longest_side_and_centers_on_click() {
    let button = Rect::new(10.0, 20.0, 120.0, 40.0);
    let ripple = Ripple::centered(button, Point::new(70.0, 40.0));
    assert_eq!(ripple.size, 120.0);
    assert_eq!(ripple.left, 0.0);
    assert_eq!(ripple.top, -40.0);
}
