//! Windowed moving average over sparse genomic positions
//!
//! Per-base methylation calls are noisy and unevenly spaced, so tracks are
//! denoised with a simple moving average over a fixed *count* of consecutive
//! sorted points. Windows are defined by point count, not genomic distance;
//! gaps between CpG sites carry no weight. Both the values and the positions
//! are averaged, so output x-coordinates are window centroids and may be
//! fractional.
//!
//! Moving sums use prefix sums (cumulative-sum differences), keeping the
//! whole computation O(n) regardless of window size.

/// Smoothing parameters shared across all samples of one plot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothParams {
    /// Number of consecutive points averaged per window
    pub window_size: usize,
    /// Below this many points, return the raw track instead of smoothing
    pub min_points_for_smooth: usize,
}

impl Default for SmoothParams {
    fn default() -> Self {
        Self {
            window_size: 20,
            min_points_for_smooth: 5,
        }
    }
}

/// Compute the moving average of `values` (and `positions`) over every
/// window of `window_size` consecutive position-sorted points
///
/// Returns `(positions, values)` of equal length. If the track is too
/// sparse to smooth (`n < window_size`, `window_size < 2`, or
/// `n < min_points_for_smooth`), the inputs are returned unchanged apart
/// from being sorted by position; callers get raw points rather than an
/// error. Otherwise the output has `n - window_size + 1` points.
///
/// NaN values are not special-cased: a NaN taints every window whose
/// prefix-sum difference involves it, exactly as a numpy cumsum would.
pub fn sliding_mean(
    positions: &[u64],
    values: &[f64],
    params: &SmoothParams,
) -> (Vec<f64>, Vec<f64>) {
    assert_eq!(
        positions.len(),
        values.len(),
        "positions and values must have equal length"
    );

    let n = positions.len();
    let w = params.window_size;

    // Joint stable sort by position
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| positions[i]);

    if n < w || w < 2 || n < params.min_points_for_smooth {
        let xs = order.iter().map(|&i| positions[i] as f64).collect();
        let ys = order.iter().map(|&i| values[i]).collect();
        return (xs, ys);
    }

    // Prefix sums with a leading zero: csum[k] = sum of the first k sorted
    // elements, so a window sum is csum[i + w] - csum[i].
    let mut csum_x = Vec::with_capacity(n + 1);
    let mut csum_y = Vec::with_capacity(n + 1);
    let (mut run_x, mut run_y) = (0.0f64, 0.0f64);
    csum_x.push(run_x);
    csum_y.push(run_y);
    for &i in &order {
        run_x += positions[i] as f64;
        run_y += values[i];
        csum_x.push(run_x);
        csum_y.push(run_y);
    }

    let out_len = n - w + 1;
    let mut xs = Vec::with_capacity(out_len);
    let mut ys = Vec::with_capacity(out_len);
    let w_f = w as f64;
    for i in 0..out_len {
        xs.push((csum_x[i + w] - csum_x[i]) / w_f);
        ys.push((csum_y[i + w] - csum_y[i]) / w_f);
    }

    (xs, ys)
}
