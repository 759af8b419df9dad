use ndarray::Array2;

/// One 8-connected foreground component.
#[derive(Clone, Debug)]
pub struct ComponentStats {
    /// Label of this component in the label image.
    pub label: u32,
    /// First pixel of the component in raster order, as (row, col).
    pub first: (usize, usize),
}

/// Label image plus per-component statistics.
#[derive(Clone, Debug)]
pub struct Labeling {
    /// Component label per pixel; 0 is background.
    pub labels: Array2<u32>,
    /// Components in raster order of their first pixel.
    pub components: Vec<ComponentStats>,
}

/// Connected component analysis on a binary mask using two-pass labeling
/// with union-find and 8-connectivity (left, upper-left, up, upper-right).
pub fn connected_components(mask: &Array2<bool>) -> Labeling {
    let (h, w) = mask.dim();
    let mut labels = Array2::<u32>::zeros((h, w));
    if h == 0 || w == 0 {
        return Labeling {
            labels,
            components: Vec::new(),
        };
    }

    let mut next_label: u32 = 1;
    // Union-find parent array. Index 0 unused; labels start at 1.
    let mut parent: Vec<u32> = vec![0; h * w / 2 + 2];

    // Pass 1: provisional labels.
    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] {
                continue;
            }

            let mut neighbors = [0u32; 4];
            if col > 0 {
                neighbors[0] = labels[[row, col - 1]];
            }
            if row > 0 {
                if col > 0 {
                    neighbors[1] = labels[[row - 1, col - 1]];
                }
                neighbors[2] = labels[[row - 1, col]];
                if col + 1 < w {
                    neighbors[3] = labels[[row - 1, col + 1]];
                }
            }

            let smallest = neighbors.iter().copied().filter(|&l| l > 0).min();
            match smallest {
                None => {
                    if next_label as usize >= parent.len() {
                        parent.resize(parent.len() * 2, 0);
                    }
                    parent[next_label as usize] = next_label;
                    labels[[row, col]] = next_label;
                    next_label += 1;
                }
                Some(min_label) => {
                    labels[[row, col]] = min_label;
                    for &l in neighbors.iter().filter(|&&l| l > 0 && l != min_label) {
                        union(&mut parent, min_label, l);
                    }
                }
            }
        }
    }

    // Flatten parent references.
    for i in 1..next_label as usize {
        parent[i] = find(&parent, i as u32);
    }

    // Pass 2: resolve labels and collect stats in raster order.
    let mut seen_root = vec![false; next_label as usize];
    let mut components: Vec<ComponentStats> = Vec::new();

    for row in 0..h {
        for col in 0..w {
            let lbl = labels[[row, col]];
            if lbl == 0 {
                continue;
            }
            let root = parent[lbl as usize];
            labels[[row, col]] = root;

            let seen = &mut seen_root[root as usize];
            if !*seen {
                *seen = true;
                components.push(ComponentStats {
                    label: root,
                    first: (row, col),
                });
            }
        }
    }

    Labeling { labels, components }
}

/// Marks background pixels reachable from outside the frame through
/// 4-connected background. Background not marked here lies in a hole.
pub fn outer_background(mask: &Array2<bool>) -> Array2<bool> {
    let (h, w) = mask.dim();
    let mut outer = Array2::from_elem((h, w), false);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for row in 0..h {
        for col in 0..w {
            let on_edge = row == 0 || col == 0 || row + 1 == h || col + 1 == w;
            if on_edge && !mask[[row, col]] {
                outer[[row, col]] = true;
                stack.push((row, col));
            }
        }
    }

    while let Some((row, col)) = stack.pop() {
        let candidates = [
            (row.wrapping_sub(1), col),
            (row + 1, col),
            (row, col.wrapping_sub(1)),
            (row, col + 1),
        ];
        for (r, c) in candidates {
            if r < h && c < w && !mask[[r, c]] && !outer[[r, c]] {
                outer[[r, c]] = true;
                stack.push((r, c));
            }
        }
    }

    outer
}

fn find(parent: &[u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        x = parent[x as usize];
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        // Merge larger root into smaller root to keep labels consistent.
        let (small, big) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[big as usize] = small;
    }
}
