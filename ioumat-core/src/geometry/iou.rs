//! Pairwise IoU matrices over two box lists.
//!
//! Two interchangeable strategies produce the same `(n x m)` matrix, where
//! row `i` / column `j` holds `list1[i].iou(&list2[j])`:
//!
//! - [`ious_naive`] loops over every pair and calls [`Box2d::iou`]. It is the
//!   correctness oracle and fine for small inputs.
//! - [`ious`] is the batch path: it decomposes both lists into coordinate
//!   arrays and computes every pair in a constant number of whole-array
//!   passes. This is the default for callers scoring thousands of boxes per
//!   side.
//!
//! Both are pure and total: empty lists yield a matrix with a zero-length
//! dimension, and degenerate (zero-area) or disjoint boxes score 0.0 rather
//! than producing NaN.

use ndarray::{Array1, Array2, Axis, Zip};

use super::bbox::Box2d;

/// Computes the full pairwise IoU matrix with a per-pair nested loop.
///
/// Reference implementation: one [`Box2d::iou`] call per cell, no
/// intermediate allocation beyond the output. Retained as the test oracle
/// for [`ious`] and for tiny inputs where batch setup is not worth it.
pub fn ious_naive(list1: &[Box2d], list2: &[Box2d]) -> Array2<f64> {
    Array2::from_shape_fn((list1.len(), list2.len()), |(i, j)| {
        list1[i].iou(&list2[j])
    })
}

/// Computes the full pairwise IoU matrix with whole-array passes.
///
/// Decomposes each list into per-coordinate vectors, broadcasts them into
/// the `(n x m)` intersection-corner matrices, clamps negative extents to
/// zero elementwise, and divides by the broadcast union areas. Wherever the
/// union area is exactly zero (two zero-area boxes with zero overlap) the
/// cell is forced to 0.0 instead of dividing 0/0.
///
/// Element-for-element equal to [`ious_naive`] on the same input, to within
/// floating-point associativity (well under 1e-9 for realistic boxes).
///
/// Allocates intermediates proportional to `n * m`; memory-bound callers
/// should chunk their inputs.
///
/// # Example
/// ```
/// use ioumat_core::geometry::bbox::Box2d;
/// use ioumat_core::geometry::iou::ious;
/// let detections = vec![Box2d::from_coords(0.0, 0.0, 2.0, 2.0)];
/// let truths = vec![Box2d::from_coords(1.0, 1.0, 3.0, 3.0)];
/// let matrix = ious(&detections, &truths);
/// assert_eq!(matrix.dim(), (1, 1));
/// assert!((matrix[[0, 0]] - 1.0 / 7.0).abs() < 1e-12);
/// ```
pub fn ious(list1: &[Box2d], list2: &[Box2d]) -> Array2<f64> {
    let (n, m) = (list1.len(), list2.len());
    if n == 0 || m == 0 {
        return Array2::zeros((n, m));
    }

    let xmin1 = coords(list1, |b| b.min.x);
    let ymin1 = coords(list1, |b| b.min.y);
    let xmax1 = coords(list1, |b| b.max.x);
    let ymax1 = coords(list1, |b| b.max.y);
    let xmin2 = coords(list2, |b| b.min.x);
    let ymin2 = coords(list2, |b| b.min.y);
    let xmax2 = coords(list2, |b| b.max.x);
    let ymax2 = coords(list2, |b| b.max.y);

    // Intersection corners for every pair: max of mins, min of maxes.
    let inter_xmin = pairwise(&xmin1, &xmin2, f64::max);
    let inter_ymin = pairwise(&ymin1, &ymin2, f64::max);
    let inter_xmax = pairwise(&xmax1, &xmax2, f64::min);
    let inter_ymax = pairwise(&ymax1, &ymax2, f64::min);

    // Negative extents mean no overlap on that axis; floor them at zero
    // before multiplying so disjoint pairs cannot score a positive area.
    let inter_w = (inter_xmax - inter_xmin).mapv(|w| w.max(0.0));
    let inter_h = (inter_ymax - inter_ymin).mapv(|h| h.max(0.0));
    let inter = inter_w * inter_h;

    // Each list's areas are computed once and broadcast-summed per pair.
    let area1 = coords(list1, Box2d::area);
    let area2 = coords(list2, Box2d::area);
    let union = pairwise(&area1, &area2, |a, b| a + b) - &inter;

    let mut out = inter;
    Zip::from(&mut out).and(&union).for_each(|cell, &denom| {
        *cell = if denom > 0.0 { *cell / denom } else { 0.0 };
    });
    out
}

/// Extracts one scalar per box into a flat array.
fn coords<F>(boxes: &[Box2d], f: F) -> Array1<f64>
where
    F: Fn(&Box2d) -> f64,
{
    boxes.iter().map(f).collect()
}

/// Broadcasts a length-n array against a length-m array into an `(n x m)`
/// matrix, applying `f` to every pair.
fn pairwise<F>(rows: &Array1<f64>, cols: &Array1<f64>, f: F) -> Array2<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let mut out = Array2::zeros((rows.len(), cols.len()));
    let rows = rows.view().insert_axis(Axis(1));
    Zip::from(&mut out)
        .and_broadcast(&rows)
        .and_broadcast(cols)
        .for_each(|cell, &a, &b| *cell = f(a, b));
    out
}
