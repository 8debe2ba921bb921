//! Distance metrics for comparing waveform segments.
//!
//! Provides a correlation-based distance and a windowed DTW distance,
//! selected through the [`Metric`] enum.
//!
//! # Example
//!
//! ```
//! use waveclust::distance::{corr_distance, Metric};
//!
//! let a = vec![1.0, 2.0, 3.0, 4.0];
//! let b = vec![2.0, 4.0, 6.0, 8.0];
//!
//! // Perfectly correlated shapes have distance 0
//! assert_eq!(corr_distance(&a, &b), 0.0);
//!
//! // Metric resolution from a configuration name
//! let metric = Metric::from_name("dtw", a.len(), 0.25);
//! assert!(metric.distance(&a, &b) > 0.0);
//! ```

pub mod correlation;
pub mod dtw;
pub mod metric;

// Re-export from correlation
pub use correlation::corr_distance;

// Re-export from dtw
pub use dtw::dtw_distance;

// Re-export from metric
pub use metric::{dtw_window, Metric};
