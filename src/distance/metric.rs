//! Metric selection and dispatch for segment comparison.

use super::correlation::corr_distance;
use super::dtw::dtw_distance;

/// Dissimilarity metric for equal-length segments.
///
/// Resolved once at setup from the configuration name, then reused for
/// every comparison; both variants are deterministic and symmetric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Correlation distance (1 - Pearson r)
    Correlation,
    /// Windowed DTW distance with a fixed band half-width
    BoundedDtw { window: usize },
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Correlation
    }
}

impl Metric {
    /// Resolve a metric by configuration name.
    ///
    /// `"dtw"` binds a band half-width of `max(1, fraction * segment_len)`.
    /// Any other name, `"corr"` included, selects the correlation distance;
    /// unrecognized names fall back to it rather than erroring.
    pub fn from_name(name: &str, segment_len: usize, window_fraction: f64) -> Self {
        match name {
            "dtw" => Metric::BoundedDtw {
                window: dtw_window(segment_len, window_fraction),
            },
            _ => Metric::Correlation,
        }
    }

    /// Distance between two segments under this metric.
    ///
    /// # Panics
    /// The correlation variant panics on unequal lengths; callers compare
    /// segments drawn from one validated set.
    pub fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            Metric::Correlation => corr_distance(a, b),
            Metric::BoundedDtw { window } => dtw_distance(a, b, *window),
        }
    }
}

/// Band half-width for a DTW metric: `max(1, fraction * segment_len)`.
pub fn dtw_window(segment_len: usize, fraction: f64) -> usize {
    ((fraction * segment_len as f64) as usize).max(1)
}
