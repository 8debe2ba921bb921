//! Activity localization within waveform segments.
//!
//! A segment's most active sub-interval is where its first difference
//! accumulates the largest sum, found with the maximum-subarray scan.
//!
//! # Example
//!
//! ```
//! use waveclust::activity::active_window;
//!
//! // Flat, then a steep rise, then flat again
//! let segment = vec![0.0, 0.0, 0.1, 2.0, 4.0, 4.1, 4.1];
//! let window = active_window(&segment).unwrap();
//!
//! assert_eq!(window.segment_range(), 1..5);
//! ```

mod kadane;

pub use kadane::{max_subarray, MaxSubarray};

use crate::core::SegmentSet;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Most active sub-interval of a segment.
///
/// Indices refer to the segment's first difference: position `i` is the
/// step from sample `i` to sample `i + 1`. `end` is inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityWindow {
    /// First difference position where the window starts
    pub start: usize,
    /// Last difference position in the window (inclusive)
    pub end: usize,
    /// Summed first-difference over the window
    pub sum: f64,
}

impl ActivityWindow {
    /// The window as a half-open sample range in the original segment.
    ///
    /// Difference position `end` is the step into sample `end + 1`, so
    /// `end + 1` is the exclusive boundary for highlighting.
    pub fn segment_range(&self) -> std::ops::Range<usize> {
        self.start..self.end + 1
    }
}

/// Locate the most active sub-interval of one segment.
///
/// Computes the first difference and scans it for the maximum-sum
/// sub-range. Returns `None` for segments with fewer than two samples,
/// which have no difference to scan.
pub fn active_window(segment: &[f64]) -> Option<ActivityWindow> {
    let diff: Vec<f64> = segment.windows(2).map(|w| w[1] - w[0]).collect();
    let best = max_subarray(&diff)?;

    Some(ActivityWindow {
        start: best.start,
        end: best.end,
        sum: best.sum,
    })
}

/// Locate the most active sub-interval of every segment in the set.
///
/// Segments are independent, so the map runs in parallel when the
/// `parallel` feature is enabled. Output order matches segment order.
pub fn activity_windows(set: &SegmentSet) -> Vec<Option<ActivityWindow>> {
    #[cfg(feature = "parallel")]
    {
        set.segments()
            .par_iter()
            .map(|s| active_window(s))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        set.segments().iter().map(|s| active_window(s)).collect()
    }
}
