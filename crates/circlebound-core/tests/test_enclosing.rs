use approx::assert_abs_diff_eq;

use circlebound_core::detection::contour::Point;
use circlebound_core::detection::enclosing::{convex_hull, min_enclosing_circle, Circle};

fn pts(coords: &[(i64, i64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn assert_contains_all(circle: &Circle, points: &[Point]) {
    for p in points {
        let d = ((p.x as f64 - circle.cx).powi(2) + (p.y as f64 - circle.cy).powi(2)).sqrt();
        assert!(d <= circle.radius + 1e-6, "{p:?} outside {circle:?}");
    }
}

#[test]
fn test_empty_set_has_no_circle() {
    assert!(min_enclosing_circle(&[]).is_none());
}

#[test]
fn test_single_point() {
    let c = min_enclosing_circle(&pts(&[(3, 4)])).unwrap();
    assert_eq!((c.cx, c.cy, c.radius), (3.0, 4.0, 0.0));
}

#[test]
fn test_two_points_form_diameter() {
    let c = min_enclosing_circle(&pts(&[(0, 0), (10, 0)])).unwrap();
    assert_abs_diff_eq!(c.cx, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.cy, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.radius, 5.0, epsilon = 1e-9);
}

#[test]
fn test_right_triangle_uses_hypotenuse() {
    let c = min_enclosing_circle(&pts(&[(0, 0), (4, 0), (0, 3)])).unwrap();
    assert_abs_diff_eq!(c.cx, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.cy, 1.5, epsilon = 1e-9);
    assert_abs_diff_eq!(c.radius, 2.5, epsilon = 1e-9);
}

#[test]
fn test_acute_triangle_uses_circumcircle() {
    let c = min_enclosing_circle(&pts(&[(0, 0), (6, 0), (3, 5)])).unwrap();
    assert_abs_diff_eq!(c.cx, 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.cy, 1.6, epsilon = 1e-9);
    assert_abs_diff_eq!(c.radius, 3.4, epsilon = 1e-9);
}

#[test]
fn test_obtuse_triangle_uses_longest_side() {
    let c = min_enclosing_circle(&pts(&[(0, 0), (10, 0), (5, 1)])).unwrap();
    assert_abs_diff_eq!(c.cx, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.cy, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.radius, 5.0, epsilon = 1e-9);
}

#[test]
fn test_collinear_points() {
    let c = min_enclosing_circle(&pts(&[(2, 2), (4, 4), (0, 0), (3, 3)])).unwrap();
    assert_abs_diff_eq!(c.cx, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.cy, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(c.radius, 8.0_f64.sqrt(), epsilon = 1e-9);
}

#[test]
fn test_scattered_points_are_enclosed_tightly() {
    let points = pts(&[
        (12, 3),
        (-4, 7),
        (0, -9),
        (5, 5),
        (8, -6),
        (-7, -2),
        (1, 11),
        (3, 0),
        (-2, 4),
        (10, 9),
    ]);
    let c = min_enclosing_circle(&points).unwrap();
    assert_contains_all(&c, &points);

    // At least two points sit on the boundary of a minimal circle.
    let on_boundary = points
        .iter()
        .filter(|p| {
            let d = ((p.x as f64 - c.cx).powi(2) + (p.y as f64 - c.cy).powi(2)).sqrt();
            (d - c.radius).abs() < 1e-6
        })
        .count();
    assert!(on_boundary >= 2, "only {on_boundary} boundary points");
}

#[test]
fn test_digital_circle_radius() {
    let mut points = Vec::new();
    for deg in 0..360 {
        let t = (deg as f64).to_radians();
        points.push(Point::new(
            (50.0 + 20.0 * t.cos()).round() as i64,
            (40.0 + 20.0 * t.sin()).round() as i64,
        ));
    }
    let c = min_enclosing_circle(&points).unwrap();
    assert_contains_all(&c, &points);
    assert_abs_diff_eq!(c.cx, 50.0, epsilon = 1.0);
    assert_abs_diff_eq!(c.cy, 40.0, epsilon = 1.0);
    assert_abs_diff_eq!(c.radius, 20.0, epsilon = 1.0);
}

#[test]
fn test_convex_hull_drops_interior_and_collinear_points() {
    let hull = convex_hull(&pts(&[(0, 0), (4, 0), (4, 4), (0, 4), (2, 2), (2, 0), (1, 3)]));
    assert_eq!(hull.len(), 4);
    for corner in pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]) {
        assert!(hull.contains(&corner), "missing {corner:?}");
    }
}

#[test]
fn test_rounding() {
    let c = Circle {
        cx: 2.4,
        cy: 7.6,
        radius: 3.5,
    };
    assert_eq!(c.rounded(), ((2, 8), 4));
}
