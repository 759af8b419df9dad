use ndarray::Array2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HSV_LOWER, DEFAULT_HSV_UPPER, PARALLEL_PIXEL_THRESHOLD};
use crate::frame::Frame;

use super::hsv::bgr_to_hsv;

/// Inclusive HSV bounds of the target color.
///
/// Bounds are not validated: a lower bound above its upper bound simply
/// matches nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl ColorRange {
    pub fn new(lower: [u8; 3], upper: [u8; 3]) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, h: u8, s: u8, v: u8) -> bool {
        h >= self.lower[0]
            && h <= self.upper[0]
            && s >= self.lower[1]
            && s <= self.upper[1]
            && v >= self.lower[2]
            && v <= self.upper[2]
    }
}

impl Default for ColorRange {
    fn default() -> Self {
        Self {
            lower: DEFAULT_HSV_LOWER,
            upper: DEFAULT_HSV_UPPER,
        }
    }
}

/// Binary mask of the pixels whose HSV value falls inside `range`.
pub fn color_mask(frame: &Frame, range: &ColorRange) -> Array2<bool> {
    let (h, w) = (frame.height(), frame.width());
    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        color_mask_parallel(frame, range, h, w)
    } else {
        color_mask_sequential(frame, range, h, w)
    }
}

fn pixel_in_range(frame: &Frame, range: &ColorRange, row: usize, col: usize) -> bool {
    let (hh, s, v) = bgr_to_hsv(
        frame.data[[row, col, 0]],
        frame.data[[row, col, 1]],
        frame.data[[row, col, 2]],
    );
    range.contains(hh, s, v)
}

fn color_mask_sequential(frame: &Frame, range: &ColorRange, h: usize, w: usize) -> Array2<bool> {
    Array2::from_shape_fn((h, w), |(row, col)| pixel_in_range(frame, range, row, col))
}

/// Row-parallel masking using Rayon.
fn color_mask_parallel(frame: &Frame, range: &ColorRange, h: usize, w: usize) -> Array2<bool> {
    let rows: Vec<Vec<bool>> = (0..h)
        .into_par_iter()
        .map(|row| {
            (0..w)
                .map(|col| pixel_in_range(frame, range, row, col))
                .collect()
        })
        .collect();

    let mut mask = Array2::from_elem((h, w), false);
    for (row, values) in rows.into_iter().enumerate() {
        for (col, v) in values.into_iter().enumerate() {
            mask[[row, col]] = v;
        }
    }
    mask
}
