//! SegmentSet data structure for fixed-length waveform segments.

use crate::error::{ClusterError, Result};

/// An ordered collection of equal-length waveform segments.
///
/// Construction validates that every segment has the same number of samples;
/// all downstream algorithms rely on this and index segments by position.
///
/// # Example
/// ```
/// use waveclust::core::SegmentSet;
///
/// let set = SegmentSet::new(vec![
///     vec![1.0, 2.0, 3.0],
///     vec![4.0, 5.0, 6.0],
/// ]).unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.segment_len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSet {
    segments: Vec<Vec<f64>>,
    segment_len: usize,
}

impl SegmentSet {
    /// Create a segment set from raw rows.
    ///
    /// An empty input yields an empty set with segment length 0. Otherwise
    /// every row must match the length of the first row.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if any row differs in length.
    pub fn new(segments: Vec<Vec<f64>>) -> Result<Self> {
        let segment_len = segments.first().map_or(0, |s| s.len());

        for segment in &segments {
            if segment.len() != segment_len {
                return Err(ClusterError::DimensionMismatch {
                    expected: segment_len,
                    got: segment.len(),
                });
            }
        }

        Ok(Self {
            segments,
            segment_len,
        })
    }

    /// Number of segments in the set.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the set contains no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of samples per segment (0 for an empty set).
    pub fn segment_len(&self) -> usize {
        self.segment_len
    }

    /// Samples of the segment at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn segment(&self, index: usize) -> &[f64] {
        &self.segments[index]
    }

    /// All segments in insertion order.
    pub fn segments(&self) -> &[Vec<f64>] {
        &self.segments
    }

    /// Build a set from rows already known to share `segment_len`.
    pub(crate) fn from_uniform_rows(segments: Vec<Vec<f64>>, segment_len: usize) -> Self {
        Self {
            segments,
            segment_len,
        }
    }

    /// A new set holding at most the first `count` segments.
    pub fn head(&self, count: usize) -> SegmentSet {
        let take = count.min(self.segments.len());
        SegmentSet {
            segments: self.segments[..take].to_vec(),
            segment_len: self.segment_len,
        }
    }
}
