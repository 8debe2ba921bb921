//! Windowed Dynamic Time Warping (DTW) distance for waveform segments.
//!
//! DTW allows elastic alignment between segments; the Sakoe-Chiba band
//! restricts warping to a diagonal corridor so cost stays O(len * window)
//! instead of O(len^2).

/// Compute the banded DTW distance between two segments.
///
/// The band half-width is widened to at least `|a.len() - b.len()|`, which
/// guarantees the corridor reaches the final cell. Out-of-band cells stay at
/// an infeasible sentinel and can never be selected by the recurrence. Point
/// cost is the squared difference; the result is the square root of the
/// accumulated cost, so identical segments score 0 and the measure grows
/// like a Euclidean distance along the warped path.
///
/// An empty segment cannot be aligned with a non-empty one; that case
/// returns `f64::INFINITY`. Two empty segments score 0.
///
/// # Arguments
/// * `a` - First segment
/// * `b` - Second segment
/// * `window` - Maximum warping offset from the diagonal
///
/// # Returns
/// DTW distance (lower is more similar)
pub fn dtw_distance(a: &[f64], b: &[f64], window: usize) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    if a.is_empty() || b.is_empty() {
        return f64::INFINITY;
    }

    let n = a.len();
    let m = b.len();

    // Ensure window is at least |n - m| so the corridor stays feasible
    let window = window.max(n.abs_diff(m));

    // Rolling two-row storage: prev = cost[i-1][..], curr = cost[i][..]
    let mut prev = vec![f64::INFINITY; m + 1];
    let mut curr = vec![f64::INFINITY; m + 1];
    prev[0] = 0.0;

    for i in 1..=n {
        curr.fill(f64::INFINITY);

        let j_start = 1.max(i.saturating_sub(window));
        let j_end = m.min(i + window);

        for j in j_start..=j_end {
            let cost = (a[i - 1] - b[j - 1]).powi(2);
            curr[j] = cost + prev[j].min(curr[j - 1]).min(prev[j - 1]);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    let total = prev[m];
    assert!(
        total.is_finite(),
        "widened DTW band always reaches the final cell"
    );
    total.sqrt()
}
