//! Z-score standardization for waveform segments.
//!
//! Metric semantics, correlation especially, assume segments on a
//! comparable scale; standardizing each segment independently removes
//! per-segment offset and amplitude.

use crate::core::SegmentSet;

/// Standardize one series to zero mean and unit variance.
///
/// Uses the population standard deviation. A zero-variance series keeps
/// scale 1 and comes back centered to all zeros instead of dividing by
/// zero.
pub fn standardize(series: &[f64]) -> Vec<f64> {
    if series.is_empty() {
        return Vec::new();
    }

    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    let variance = series.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();

    let scale = if std == 0.0 { 1.0 } else { std };
    series.iter().map(|&x| (x - mean) / scale).collect()
}

/// Standardize every segment of the set independently.
///
/// Returns a new set of the same shape; the input is untouched.
pub fn standardize_segments(set: &SegmentSet) -> SegmentSet {
    let rows = set.segments().iter().map(|s| standardize(s)).collect();
    SegmentSet::from_uniform_rows(rows, set.segment_len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==================== standardize ====================

    #[test]
    fn standardize_known_values() {
        let result = standardize(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let inv_std = 1.0 / 2.0_f64.sqrt();

        let expected = [-2.0, -1.0, 0.0, 1.0, 2.0];
        for (got, want) in result.iter().zip(expected.iter()) {
            assert_relative_eq!(*got, want * inv_std, epsilon = 1e-10);
        }
    }

    #[test]
    fn standardize_zero_mean_unit_variance() {
        let result = standardize(&[3.0, 9.0, -4.0, 0.5, 12.0, -7.5]);

        let n = result.len() as f64;
        let mean = result.iter().sum::<f64>() / n;
        let variance = result.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;

        assert_relative_eq!(mean, 0.0, epsilon = 1e-10);
        assert_relative_eq!(variance, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn standardize_flat_series_becomes_zeros() {
        let result = standardize(&[5.0; 8]);
        for &x in &result {
            assert_relative_eq!(x, 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn standardize_empty() {
        assert!(standardize(&[]).is_empty());
    }

    // ==================== standardize_segments ====================

    #[test]
    fn segments_are_standardized_independently() {
        let set = SegmentSet::new(vec![
            vec![1.0, 2.0, 3.0, 4.0],
            vec![100.0, 200.0, 300.0, 400.0],
            vec![7.0, 7.0, 7.0, 7.0],
        ])
        .unwrap();

        let scaled = standardize_segments(&set);

        assert_eq!(scaled.len(), 3);
        assert_eq!(scaled.segment_len(), 4);

        // Same shape at different amplitude standardizes identically
        for (a, b) in scaled.segment(0).iter().zip(scaled.segment(1).iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-10);
        }
        for &x in scaled.segment(2) {
            assert_relative_eq!(x, 0.0, epsilon = 1e-10);
        }
    }
}
