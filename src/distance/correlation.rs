//! Correlation-based distance for waveform segments.
//!
//! Converts the Pearson correlation coefficient into a dissimilarity in
//! [0, 2]: identical shape -> 0, uncorrelated -> 1, anti-correlated -> 2.

/// Compute the correlation distance `1 - r` between two segments.
///
/// A segment with zero variance carries no shape information, so the
/// coefficient is undefined there. Two flat segments are treated as
/// identical in shape (distance 0); a flat segment against a varying one
/// is treated as maximally unrelated (distance 1).
///
/// # Arguments
/// * `a` - First segment
/// * `b` - Second segment (same length as `a`)
///
/// # Returns
/// Distance in [0, 2] (lower is more similar)
///
/// # Panics
/// Panics if the segments differ in length.
pub fn corr_distance(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "correlation distance requires equal-length segments"
    );

    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n.max(1.0);
    let mean_b = b.iter().sum::<f64>() / n.max(1.0);

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    if var_a == 0.0 || var_b == 0.0 {
        return if var_a == var_b { 0.0 } else { 1.0 };
    }

    1.0 - cov / (var_a * var_b).sqrt()
}
