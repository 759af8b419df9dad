use super::contour::Point;

const CONTAINS_EPSILON: f64 = 1e-7;

/// Circle with sub-pixel center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Circle {
    fn from_point(p: (f64, f64)) -> Self {
        Self {
            cx: p.0,
            cy: p.1,
            radius: 0.0,
        }
    }

    /// Smallest circle through two points (they form a diameter).
    fn from_diameter(a: (f64, f64), b: (f64, f64)) -> Self {
        let cx = (a.0 + b.0) / 2.0;
        let cy = (a.1 + b.1) / 2.0;
        Self {
            cx,
            cy,
            radius: ((a.0 - cx).powi(2) + (a.1 - cy).powi(2)).sqrt(),
        }
    }

    /// Circle through three points. Falls back to the widest diameter
    /// circle when the points are collinear.
    fn circumscribed(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Self {
        let (bx, by) = (b.0 - a.0, b.1 - a.1);
        let (cx, cy) = (c.0 - a.0, c.1 - a.1);
        let d = 2.0 * (bx * cy - by * cx);
        if d.abs() < f64::EPSILON {
            let candidates = [
                Self::from_diameter(a, b),
                Self::from_diameter(a, c),
                Self::from_diameter(b, c),
            ];
            return candidates
                .into_iter()
                .fold(Self::from_point(a), |best, cand| {
                    if cand.radius > best.radius {
                        cand
                    } else {
                        best
                    }
                });
        }
        let b2 = bx * bx + by * by;
        let c2 = cx * cx + cy * cy;
        let ux = (cy * b2 - by * c2) / d;
        let uy = (bx * c2 - cx * b2) / d;
        Self {
            cx: a.0 + ux,
            cy: a.1 + uy,
            radius: (ux * ux + uy * uy).sqrt(),
        }
    }

    pub fn contains(&self, p: (f64, f64)) -> bool {
        let dist = ((p.0 - self.cx).powi(2) + (p.1 - self.cy).powi(2)).sqrt();
        dist <= self.radius + CONTAINS_EPSILON * self.radius.max(1.0)
    }

    /// Center and radius rounded to the nearest integer pixel.
    pub fn rounded(&self) -> ((i64, i64), u32) {
        (
            (self.cx.round() as i64, self.cy.round() as i64),
            self.radius.round().max(0.0) as u32,
        )
    }
}

/// Smallest circle containing every point of the set.
///
/// Only convex hull vertices can touch the minimum enclosing circle, so the
/// incremental Welzl construction runs on the hull. Returns `None` for an
/// empty set.
pub fn min_enclosing_circle(points: &[Point]) -> Option<Circle> {
    let hull = convex_hull(points);
    let pts: Vec<(f64, f64)> = hull.iter().map(|p| (p.x as f64, p.y as f64)).collect();
    let first = *pts.first()?;

    let mut circle = Circle::from_point(first);
    for i in 1..pts.len() {
        if circle.contains(pts[i]) {
            continue;
        }
        circle = Circle::from_point(pts[i]);
        for j in 0..i {
            if circle.contains(pts[j]) {
                continue;
            }
            circle = Circle::from_diameter(pts[i], pts[j]);
            for k in 0..j {
                if !circle.contains(pts[k]) {
                    circle = Circle::circumscribed(pts[i], pts[j], pts[k]);
                }
            }
        }
    }
    Some(circle)
}

/// Convex hull by Andrew's monotone chain, collinear points removed.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut sorted: Vec<Point> = points.to_vec();
    sorted.sort_unstable_by_key(|p| (p.x, p.y));
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    let cross =
        |o: Point, a: Point, b: Point| (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x);

    let mut lower: Vec<Point> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Point> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0 {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
