//! Data transformations applied before clustering.
//!
//! # Example
//!
//! ```
//! use waveclust::transform::standardize;
//!
//! let scaled = standardize(&[1.0, 2.0, 3.0, 4.0, 5.0]);
//!
//! let mean: f64 = scaled.iter().sum::<f64>() / scaled.len() as f64;
//! assert!(mean.abs() < 1e-12);
//! ```

pub mod scale;

// Re-export from scale
pub use scale::{standardize, standardize_segments};
