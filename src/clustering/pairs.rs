//! Within-cluster pairwise analysis: closest pair and cohesion statistics.

use crate::core::SegmentSet;
use crate::distance::Metric;

/// Most similar pair of members found by [`closest_pair`].
///
/// `i` and `j` are positions within the searched index list, with `i < j`.
/// A search over fewer than two members yields the sentinel distance
/// `f64::INFINITY`; check [`is_valid`](ClosestPair::is_valid) before use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPair {
    /// Position of the first member
    pub i: usize,
    /// Position of the second member
    pub j: usize,
    /// Distance between the two members
    pub distance: f64,
}

impl ClosestPair {
    /// Whether a real pair was found.
    pub fn is_valid(&self) -> bool {
        self.distance.is_finite()
    }
}

/// Pairwise distance summary of a cluster.
///
/// All zero for clusters with fewer than two members, which have no
/// pairwise structure to report.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CohesionStats {
    /// Mean pairwise distance
    pub mean: f64,
    /// Smallest pairwise distance
    pub min: f64,
    /// Largest pairwise distance
    pub max: f64,
}

/// Find the closest pair of members under the metric.
///
/// Exhaustive scan over all unordered pairs in `(i, j)` lexicographic
/// order; only a strictly smaller distance replaces the best-known pair,
/// so ties keep the first one found.
///
/// # Arguments
/// * `set` - Segment storage
/// * `indices` - Member rows to search; result positions refer to this list
/// * `metric` - Bound distance metric
pub fn closest_pair(set: &SegmentSet, indices: &[usize], metric: Metric) -> ClosestPair {
    let n = indices.len();
    let mut best = ClosestPair {
        i: 0,
        j: 1,
        distance: f64::INFINITY,
    };

    for i in 0..n {
        for j in (i + 1)..n {
            let d = metric.distance(set.segment(indices[i]), set.segment(indices[j]));
            if d < best.distance {
                best = ClosestPair { i, j, distance: d };
            }
        }
    }

    best
}

/// Summarize all pairwise distances among the members.
///
/// Same enumeration as [`closest_pair`], accumulating mean, minimum, and
/// maximum instead of selecting one pair.
pub fn cohesion(set: &SegmentSet, indices: &[usize], metric: Metric) -> CohesionStats {
    let n = indices.len();
    if n < 2 {
        return CohesionStats::default();
    }

    let mut sum = 0.0;
    let mut count = 0usize;
    let mut min = f64::INFINITY;
    let mut max = 0.0_f64;

    for i in 0..n {
        for j in (i + 1)..n {
            let d = metric.distance(set.segment(indices[i]), set.segment(indices[j]));
            sum += d;
            count += 1;
            min = min.min(d);
            max = max.max(d);
        }
    }

    CohesionStats {
        mean: sum / count as f64,
        min,
        max,
    }
}
