//! Recursive bisection clustering over segment indices.
//!
//! Splits an index set top-down with a farthest-point heuristic until the
//! pieces are small enough, without ever materializing a pairwise distance
//! matrix.

use crate::core::SegmentSet;
use crate::distance::Metric;
use rand::prelude::*;
use rand::SeedableRng;

/// Recursive bisection configuration.
#[derive(Debug, Clone)]
pub struct BisectConfig {
    /// Index sets at or below this size are emitted without splitting
    pub max_cluster_size: usize,
    /// Index sets at or below this size are never split further
    pub min_cluster_size: usize,
    /// Maximum recursion depth
    pub max_depth: usize,
    /// Random seed for split-seed selection (None for random)
    pub seed: Option<u64>,
}

impl Default for BisectConfig {
    fn default() -> Self {
        Self {
            max_cluster_size: 60,
            min_cluster_size: 15,
            max_depth: 10,
            seed: None,
        }
    }
}

impl BisectConfig {
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

/// One cluster of segment indices produced by the bisection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    indices: Vec<usize>,
}

impl Cluster {
    /// Segment indices belonging to this cluster.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Cluster every segment of the set by recursive bisection.
///
/// An index set is emitted as a terminal cluster once it is small enough
/// (`min_cluster_size`, `max_cluster_size`) or the recursion is deep
/// enough (`max_depth`); otherwise it is split in two around a pair of
/// far-apart members and both halves recurse. Every input index ends up
/// in exactly one output cluster, whatever the seed or configuration.
///
/// Split seeds are derived per branch from the configured base seed, so
/// partitions are reproducible and independent of whether the two
/// branches run sequentially or in parallel.
///
/// # Arguments
/// * `set` - Segments to cluster
/// * `metric` - Bound distance metric
/// * `config` - Size, depth, and seed parameters
///
/// # Example
/// ```
/// use waveclust::clustering::{bisect, BisectConfig};
/// use waveclust::core::SegmentSet;
/// use waveclust::distance::Metric;
///
/// let set = SegmentSet::new(vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![0.1, 1.1, 2.1, 3.1],
///     vec![3.0, 2.0, 1.0, 0.0],
///     vec![3.1, 2.1, 1.1, 0.1],
/// ]).unwrap();
///
/// let config = BisectConfig::default()
///     .max_cluster_size(2)
///     .min_cluster_size(1)
///     .seed(42);
/// let clusters = bisect(&set, Metric::Correlation, &config);
///
/// let total: usize = clusters.iter().map(|c| c.len()).sum();
/// assert_eq!(total, set.len());
/// ```
pub fn bisect(set: &SegmentSet, metric: Metric, config: &BisectConfig) -> Vec<Cluster> {
    bisect_indices(set, (0..set.len()).collect(), metric, config)
}

/// Cluster an explicit list of segment indices by recursive bisection.
///
/// Same procedure as [`bisect`], restricted to the given indices. An
/// empty list yields no clusters.
pub fn bisect_indices(
    set: &SegmentSet,
    indices: Vec<usize>,
    metric: Metric,
    config: &BisectConfig,
) -> Vec<Cluster> {
    if indices.is_empty() {
        return Vec::new();
    }

    let base_seed = config.seed.unwrap_or_else(rand::random);
    bisect_recursive(set, indices, metric, config, 0, base_seed)
}

fn bisect_recursive(
    set: &SegmentSet,
    indices: Vec<usize>,
    metric: Metric,
    config: &BisectConfig,
    depth: usize,
    base_seed: u64,
) -> Vec<Cluster> {
    let n = indices.len();
    if n <= config.min_cluster_size || depth >= config.max_depth || n <= config.max_cluster_size {
        return vec![Cluster { indices }];
    }

    let seed = branch_seed(base_seed, depth, &indices);
    let (left, right) = split_indices(set, &indices, metric, seed);

    // A split that made no progress would recurse forever; emit instead
    if left.is_empty() || right.is_empty() || left.len() == n || right.len() == n {
        return vec![Cluster { indices }];
    }

    #[cfg(feature = "parallel")]
    let (mut clusters, mut rest) = rayon::join(
        || bisect_recursive(set, left, metric, config, depth + 1, base_seed),
        || bisect_recursive(set, right, metric, config, depth + 1, base_seed),
    );

    #[cfg(not(feature = "parallel"))]
    let (mut clusters, mut rest) = (
        bisect_recursive(set, left, metric, config, depth + 1, base_seed),
        bisect_recursive(set, right, metric, config, depth + 1, base_seed),
    );

    clusters.append(&mut rest);
    clusters
}

/// Derive a deterministic per-branch seed from the branch's identity.
fn branch_seed(base: u64, depth: usize, indices: &[usize]) -> u64 {
    let mut h = base ^ (depth as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    h ^= (indices[0] as u64).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    h ^= (indices.len() as u64).wrapping_mul(0x94d0_49bb_1331_11eb);
    h
}

/// Split an index list into two groups around two far-apart members.
///
/// Lists of up to two members split by position. Otherwise a random
/// member seeds a farthest-point probe: `far_a` maximizes distance to the
/// seed, `far_b` maximizes distance to `far_a`, and each member joins the
/// group of whichever pole is closer (ties go left). If every member
/// lands in one group the positional split is used instead.
fn split_indices(
    set: &SegmentSet,
    indices: &[usize],
    metric: Metric,
    seed: u64,
) -> (Vec<usize>, Vec<usize>) {
    if indices.len() <= 2 {
        return halve(indices);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let seed_member = indices[rng.gen_range(0..indices.len())];
    let far_a = farthest_from(set, indices, seed_member, metric);
    let far_b = farthest_from(set, indices, far_a, metric);

    let mut left = Vec::new();
    let mut right = Vec::new();
    for &idx in indices {
        let dist_a = metric.distance(set.segment(far_a), set.segment(idx));
        let dist_b = metric.distance(set.segment(far_b), set.segment(idx));
        if dist_a <= dist_b {
            left.push(idx);
        } else {
            right.push(idx);
        }
    }

    if left.is_empty() || right.is_empty() {
        return halve(indices);
    }
    (left, right)
}

/// The member farthest from `from`; ties keep the first one scanned.
fn farthest_from(set: &SegmentSet, indices: &[usize], from: usize, metric: Metric) -> usize {
    let mut best = indices[0];
    let mut best_dist = metric.distance(set.segment(from), set.segment(best));

    for &idx in &indices[1..] {
        let dist = metric.distance(set.segment(from), set.segment(idx));
        if dist > best_dist {
            best_dist = dist;
            best = idx;
        }
    }

    best
}

fn halve(indices: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let half = indices.len() / 2;
    (indices[..half].to_vec(), indices[half..].to_vec())
}
