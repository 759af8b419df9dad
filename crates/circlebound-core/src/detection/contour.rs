use ndarray::Array2;

use super::components::{connected_components, outer_background};

/// Integer pixel coordinate, `x` is the column and `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Outer boundary of one mask region.
#[derive(Clone, Debug)]
pub struct Contour {
    /// Boundary points in clockwise order (image coordinates, y down).
    /// Straight runs keep only their end points.
    pub points: Vec<Point>,
    /// Area enclosed by the boundary polygon.
    pub area: f64,
}

/// Clockwise 8-neighborhood, starting east.
const DIRECTIONS: [(i64, i64); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const WEST: usize = 4;

/// Extract the outer contours of a binary mask.
///
/// Regions are 8-connected. Regions lying inside a hole of another region
/// are skipped, and holes are not traced. Contours come out in raster order
/// of each region's top-left pixel.
pub fn find_external_contours(mask: &Array2<bool>) -> Vec<Contour> {
    let (h, w) = mask.dim();
    let labeling = connected_components(mask);
    if labeling.components.is_empty() {
        return Vec::new();
    }

    let outer = outer_background(mask);
    let mut external = vec![false; labeling.components.len()];
    let mut slot_of_label = std::collections::HashMap::with_capacity(labeling.components.len());
    for (slot, comp) in labeling.components.iter().enumerate() {
        slot_of_label.insert(comp.label, slot);
    }

    for row in 0..h {
        for col in 0..w {
            let lbl = labeling.labels[[row, col]];
            if lbl == 0 {
                continue;
            }
            let slot = slot_of_label[&lbl];
            if external[slot] {
                continue;
            }
            let on_edge = row == 0 || col == 0 || row + 1 == h || col + 1 == w;
            let touches_outer = on_edge
                || outer[[row - 1, col]]
                || outer[[row + 1, col]]
                || outer[[row, col - 1]]
                || outer[[row, col + 1]];
            if touches_outer {
                external[slot] = true;
            }
        }
    }

    labeling
        .components
        .iter()
        .zip(external)
        .filter(|(_, is_external)| *is_external)
        .map(|(comp, _)| {
            let (row, col) = comp.first;
            let traced = trace_boundary(mask, Point::new(col as i64, row as i64));
            let area = polygon_area(&traced);
            Contour {
                points: compress_chain(&traced),
                area,
            }
        })
        .collect()
}

/// Moore-neighbor boundary tracing from the region's first raster pixel,
/// stopping when the first move is about to be repeated.
fn trace_boundary(mask: &Array2<bool>, start: Point) -> Vec<Point> {
    let (h, w) = mask.dim();
    let is_set = |p: Point| {
        p.x >= 0
            && p.y >= 0
            && (p.x as usize) < w
            && (p.y as usize) < h
            && mask[[p.y as usize, p.x as usize]]
    };

    let mut points = vec![start];
    let mut current = start;
    // The west neighbor of the first raster pixel is always background.
    let mut backtrack = WEST;
    let mut first_move: Option<Point> = None;
    let max_steps = 4 * mask.len() + 8;

    for _ in 0..max_steps {
        let mut next = None;
        for i in 1..=8 {
            let dir = (backtrack + i) % 8;
            let (dx, dy) = DIRECTIONS[dir];
            let candidate = Point::new(current.x + dx, current.y + dy);
            if is_set(candidate) {
                next = Some((candidate, dir));
                break;
            }
        }

        // Isolated pixel.
        let Some((candidate, dir)) = next else {
            break;
        };

        if current == start {
            match first_move {
                None => first_move = Some(candidate),
                Some(first) if first == candidate => break,
                Some(_) => {}
            }
        }

        let (bx, by) = DIRECTIONS[(dir + 7) % 8];
        let checked = Point::new(current.x + bx, current.y + by);
        backtrack = direction_index(checked.x - candidate.x, checked.y - candidate.y);

        points.push(candidate);
        current = candidate;
    }

    if points.len() > 1 && points.last() == Some(&start) {
        points.pop();
    }
    points
}

fn direction_index(dx: i64, dy: i64) -> usize {
    DIRECTIONS
        .iter()
        .position(|&d| d == (dx, dy))
        .unwrap_or(WEST)
}

/// Drop points in the middle of straight horizontal, vertical or diagonal runs.
fn compress_chain(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }
    (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            (cur.x - prev.x, cur.y - prev.y) != (next.x - cur.x, next.y - cur.y)
        })
        .map(|i| points[i])
        .collect()
}

/// Shoelace area of a closed polygon.
pub fn polygon_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: i64 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice.abs() as f64 / 2.0
}
