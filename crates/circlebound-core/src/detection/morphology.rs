use ndarray::{Array2, Axis};

/// Binary erosion with a `size`x`size` square kernel.
///
/// A pixel stays true only if every in-frame pixel under the kernel is true.
/// Pixels outside the frame never erode the mask, so regions touching the
/// border keep their border pixels.
pub fn erode(mask: &Array2<bool>, size: usize) -> Array2<bool> {
    let rows = sweep(mask, Axis(1), size, Reduce::All);
    sweep(&rows, Axis(0), size, Reduce::All)
}

/// Binary dilation with a `size`x`size` square kernel.
///
/// A pixel becomes true if any in-frame pixel under the kernel is true.
pub fn dilate(mask: &Array2<bool>, size: usize) -> Array2<bool> {
    let rows = sweep(mask, Axis(1), size, Reduce::Any);
    sweep(&rows, Axis(0), size, Reduce::Any)
}

/// Morphological opening (erosion followed by dilation).
///
/// Removes foreground specks smaller than the kernel while roughly keeping
/// the outline of larger regions.
pub fn morphological_opening(mask: &Array2<bool>, size: usize) -> Array2<bool> {
    let eroded = erode(mask, size);
    dilate(&eroded, size)
}

#[derive(Clone, Copy)]
enum Reduce {
    All,
    Any,
}

/// One-dimensional pass of a square kernel along `axis`.
///
/// Uses a running count of true pixels per lane, so the cost does not depend
/// on the kernel size. The kernel anchor sits at `size / 2`.
fn sweep(mask: &Array2<bool>, axis: Axis, size: usize, reduce: Reduce) -> Array2<bool> {
    if size <= 1 {
        return mask.clone();
    }
    let before = size / 2;
    let after = size - 1 - before;

    let mut result = Array2::from_elem(mask.dim(), false);
    for (lane, mut out) in mask.lanes(axis).into_iter().zip(result.lanes_mut(axis)) {
        let n = lane.len();
        let mut prefix = vec![0usize; n + 1];
        for (i, &v) in lane.iter().enumerate() {
            prefix[i + 1] = prefix[i] + v as usize;
        }
        for i in 0..n {
            let lo = i.saturating_sub(before);
            let hi = (i + after).min(n - 1);
            let count = prefix[hi + 1] - prefix[lo];
            out[i] = match reduce {
                Reduce::All => count == hi + 1 - lo,
                Reduce::Any => count > 0,
            };
        }
    }
    result
}
