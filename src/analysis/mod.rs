//! End-to-end segment analysis.
//!
//! Binds a metric from configuration, clusters the segments, and gathers
//! per-cluster and per-segment diagnostics in one call.

use std::borrow::Cow;

use crate::activity::{activity_windows, ActivityWindow};
use crate::clustering::{
    bisect, closest_pair, cohesion, BisectConfig, ClosestPair, Cluster, CohesionStats,
};
use crate::core::SegmentSet;
use crate::distance::Metric;
use crate::error::{ClusterError, Result};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Analysis pipeline configuration.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Metric name; `"corr"` and `"dtw"` are recognized, anything else
    /// falls back to `"corr"`
    pub metric: String,
    /// DTW band half-width as a fraction of the segment length
    pub dtw_window_fraction: f64,
    /// At most this many segments are analyzed
    pub max_segments: usize,
    /// Cluster size ceiling for the bisection
    pub max_cluster_size: usize,
    /// Cluster size floor for the bisection
    pub min_cluster_size: usize,
    /// Maximum bisection depth
    pub max_depth: usize,
    /// Random seed for reproducible clustering (None for random)
    pub seed: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            metric: "corr".to_string(),
            dtw_window_fraction: 0.1,
            max_segments: 1000,
            max_cluster_size: 60,
            min_cluster_size: 15,
            max_depth: 10,
            seed: None,
        }
    }
}

impl AnalysisConfig {
    /// Set the metric name.
    pub fn metric(mut self, name: &str) -> Self {
        self.metric = name.to_string();
        self
    }

    /// Set the DTW band fraction.
    pub fn dtw_window_fraction(mut self, fraction: f64) -> Self {
        self.dtw_window_fraction = fraction;
        self
    }

    /// Set the segment cap.
    pub fn max_segments(mut self, count: usize) -> Self {
        self.max_segments = count.max(1);
        self
    }

    /// Set the maximum cluster size.
    pub fn max_cluster_size(mut self, size: usize) -> Self {
        self.max_cluster_size = size.max(1);
        self
    }

    /// Set the minimum cluster size.
    pub fn min_cluster_size(mut self, size: usize) -> Self {
        self.min_cluster_size = size.max(1);
        self
    }

    /// Set the maximum recursion depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Diagnostics for one cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterReport {
    /// Most similar pair of members (positions within the cluster)
    pub closest_pair: ClosestPair,
    /// Pairwise distance summary
    pub cohesion: CohesionStats,
}

/// Result of a full analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Emitted clusters, in bisection order
    pub clusters: Vec<Cluster>,
    /// Per-cluster diagnostics, aligned with `clusters`
    pub reports: Vec<ClusterReport>,
    /// Per-segment activity windows, aligned with analyzed segment order
    pub activity: Vec<ActivityWindow>,
    /// Metric the run was bound to
    pub metric: Metric,
}

impl AnalysisReport {
    /// Size of each cluster, in cluster order.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(|c| c.len()).collect()
    }

    /// Global segment indices of a cluster's closest pair.
    ///
    /// Returns `None` for an unknown cluster position or a degenerate
    /// pair (cluster with fewer than two members).
    pub fn closest_pair_segments(&self, cluster: usize) -> Option<(usize, usize)> {
        let report = self.reports.get(cluster)?;
        if !report.closest_pair.is_valid() {
            return None;
        }

        let members = self.clusters[cluster].indices();
        Some((members[report.closest_pair.i], members[report.closest_pair.j]))
    }
}

/// Run the full analysis pipeline over a segment set.
///
/// Resolves the metric once from the configured name, clusters at most
/// `max_segments` segments by recursive bisection, then reports each
/// cluster's closest pair and cohesion and each segment's most active
/// sub-interval.
///
/// # Errors
/// `EmptyData` for an empty set; `InsufficientData` when segments carry
/// fewer than two samples (no first difference to scan).
///
/// # Example
/// ```
/// use waveclust::analysis::{analyze, AnalysisConfig};
/// use waveclust::core::SegmentSet;
///
/// let set = SegmentSet::new(vec![
///     vec![0.0, 1.0, 0.0, -1.0],
///     vec![0.1, 1.1, 0.1, -0.9],
///     vec![1.0, 0.0, -1.0, 0.0],
/// ]).unwrap();
///
/// let report = analyze(&set, &AnalysisConfig::default()).unwrap();
///
/// assert_eq!(report.cluster_sizes(), vec![3]);
/// assert_eq!(report.activity.len(), 3);
/// assert_eq!(report.closest_pair_segments(0), Some((0, 1)));
/// ```
pub fn analyze(set: &SegmentSet, config: &AnalysisConfig) -> Result<AnalysisReport> {
    let working: Cow<'_, SegmentSet> = if set.len() > config.max_segments {
        Cow::Owned(set.head(config.max_segments))
    } else {
        Cow::Borrowed(set)
    };

    if working.is_empty() {
        return Err(ClusterError::EmptyData);
    }
    if working.segment_len() < 2 {
        return Err(ClusterError::InsufficientData {
            needed: 2,
            got: working.segment_len(),
        });
    }

    let metric = Metric::from_name(
        &config.metric,
        working.segment_len(),
        config.dtw_window_fraction,
    );

    let mut bisect_config = BisectConfig::default()
        .max_cluster_size(config.max_cluster_size)
        .min_cluster_size(config.min_cluster_size)
        .max_depth(config.max_depth);
    if let Some(seed) = config.seed {
        bisect_config = bisect_config.seed(seed);
    }

    let clusters = bisect(&working, metric, &bisect_config);

    #[cfg(feature = "parallel")]
    let reports: Vec<ClusterReport> = clusters
        .par_iter()
        .map(|c| ClusterReport {
            closest_pair: closest_pair(&working, c.indices(), metric),
            cohesion: cohesion(&working, c.indices(), metric),
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let reports: Vec<ClusterReport> = clusters
        .iter()
        .map(|c| ClusterReport {
            closest_pair: closest_pair(&working, c.indices(), metric),
            cohesion: cohesion(&working, c.indices(), metric),
        })
        .collect();

    // Every analyzed segment has at least one difference step, so each
    // one yields a window
    let activity: Vec<ActivityWindow> = activity_windows(&working).into_iter().flatten().collect();
    debug_assert_eq!(activity.len(), working.len());

    Ok(AnalysisReport {
        clusters,
        reports,
        activity,
        metric,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sine_bank(n: usize, len: usize) -> SegmentSet {
        let rows = (0..n)
            .map(|k| {
                let phase = k as f64 * 0.3;
                (0..len)
                    .map(|i| (i as f64 * 0.25 + phase).sin())
                    .collect::<Vec<f64>>()
            })
            .collect();
        SegmentSet::new(rows).unwrap()
    }

    // ==================== error cases ====================

    #[test]
    fn empty_set_is_an_error() {
        let set = SegmentSet::new(Vec::new()).unwrap();
        let err = analyze(&set, &AnalysisConfig::default()).unwrap_err();
        assert_eq!(err, ClusterError::EmptyData);
    }

    #[test]
    fn single_sample_segments_are_an_error() {
        let set = SegmentSet::new(vec![vec![1.0], vec![2.0]]).unwrap();
        let err = analyze(&set, &AnalysisConfig::default()).unwrap_err();
        assert_eq!(err, ClusterError::InsufficientData { needed: 2, got: 1 });
    }

    // ==================== segment cap ====================

    #[test]
    fn cap_limits_the_analyzed_rows() {
        let set = sine_bank(12, 16);
        let config = AnalysisConfig::default().max_segments(5).seed(1);

        let report = analyze(&set, &config).unwrap();

        assert_eq!(report.activity.len(), 5);
        let total: usize = report.cluster_sizes().iter().sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn cap_larger_than_set_changes_nothing() {
        let set = sine_bank(4, 16);
        let config = AnalysisConfig::default().max_segments(1000).seed(1);

        let report = analyze(&set, &config).unwrap();
        assert_eq!(report.activity.len(), 4);
    }

    // ==================== report structure ====================

    #[test]
    fn reports_align_with_clusters() {
        let set = sine_bank(10, 20);
        let config = AnalysisConfig::default()
            .max_cluster_size(4)
            .min_cluster_size(1)
            .seed(42);

        let report = analyze(&set, &config).unwrap();

        assert_eq!(report.reports.len(), report.clusters.len());
        for (cluster, cr) in report.clusters.iter().zip(report.reports.iter()) {
            assert_eq!(
                cr.closest_pair,
                closest_pair(&set, cluster.indices(), report.metric)
            );
            assert_eq!(cr.cohesion, cohesion(&set, cluster.indices(), report.metric));
        }
    }

    #[test]
    fn closest_pair_positions_map_to_segment_indices() {
        let base: Vec<f64> = (0..20).map(|i| (i as f64 * 0.4).sin()).collect();
        let mut rows = sine_bank(6, 20).segments().to_vec();
        rows.push(base.clone());
        rows.push(base);
        let set = SegmentSet::new(rows).unwrap();

        let report = analyze(&set, &AnalysisConfig::default().seed(5)).unwrap();

        // One cluster holds everything under the default sizes; its closest
        // pair is the duplicated row at global positions 6 and 7
        let (a, b) = report.closest_pair_segments(0).unwrap();
        let d = report.metric.distance(set.segment(a), set.segment(b));
        assert_relative_eq!(d, 0.0, epsilon = 1e-10);
        assert_eq!((a, b), (6, 7));
    }

    #[test]
    fn unknown_cluster_position_is_none() {
        let set = sine_bank(3, 8);
        let report = analyze(&set, &AnalysisConfig::default()).unwrap();
        assert_eq!(report.closest_pair_segments(99), None);
    }

    // ==================== metric binding ====================

    #[test]
    fn dtw_name_binds_a_window_from_segment_length() {
        let set = sine_bank(4, 40);
        let config = AnalysisConfig::default().metric("dtw").dtw_window_fraction(0.1);

        let report = analyze(&set, &config).unwrap();
        assert_eq!(report.metric, Metric::BoundedDtw { window: 4 });
    }

    #[test]
    fn unrecognized_metric_falls_back_to_correlation() {
        let set = sine_bank(4, 16);
        let config = AnalysisConfig::default().metric("euclidean");

        let report = analyze(&set, &config).unwrap();
        assert_eq!(report.metric, Metric::Correlation);
    }
}
