//! # waveclust
//!
//! Clustering engine for fixed-length physiological waveform segments.
//!
//! Groups segments into cohesive clusters by recursive bisection under a
//! pluggable similarity metric (correlation distance or windowed DTW),
//! finds the most similar pair inside each cluster, and localizes each
//! segment's most active sub-interval with a maximum-subarray scan over
//! its first difference.

pub mod activity;
pub mod analysis;
pub mod clustering;
pub mod core;
pub mod distance;
pub mod error;
pub mod transform;

pub use error::{ClusterError, Result};

pub mod prelude {
    pub use crate::activity::{active_window, activity_windows, ActivityWindow};
    pub use crate::analysis::{analyze, AnalysisConfig, AnalysisReport};
    pub use crate::clustering::{bisect, BisectConfig, Cluster};
    pub use crate::core::SegmentSet;
    pub use crate::distance::Metric;
    pub use crate::error::{ClusterError, Result};
    pub use crate::transform::standardize_segments;
}
