//! Error types for the waveclust library.

use thiserror::Error;

/// Result type alias for clustering operations.
pub type Result<T> = std::result::Result<T, ClusterError>;

/// Errors that can occur while preparing or analyzing segment sets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// Input segment set is empty.
    #[error("empty segment set")]
    EmptyData,

    /// Segments are too short for the operation.
    #[error("insufficient samples: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Segment length differs from the rest of the set.
    #[error("segment length mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}
