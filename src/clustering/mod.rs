//! Segment clustering by recursive bisection, plus within-cluster
//! diagnostics.
//!
//! # Example
//!
//! ```
//! use waveclust::clustering::{bisect, closest_pair, BisectConfig};
//! use waveclust::core::SegmentSet;
//! use waveclust::distance::Metric;
//!
//! let set = SegmentSet::new(vec![
//!     vec![1.0, 2.0, 3.0],
//!     vec![2.0, 4.0, 6.0],
//!     vec![3.0, 1.0, 2.0],
//! ]).unwrap();
//!
//! let clusters = bisect(&set, Metric::Correlation, &BisectConfig::default());
//! assert_eq!(clusters.len(), 1);
//!
//! let pair = closest_pair(&set, clusters[0].indices(), Metric::Correlation);
//! assert_eq!((pair.i, pair.j), (0, 1));
//! ```

pub mod bisect;
pub mod pairs;

// Re-export from bisect
pub use bisect::{bisect, bisect_indices, BisectConfig, Cluster};

// Re-export from pairs
pub use pairs::{closest_pair, cohesion, ClosestPair, CohesionStats};
