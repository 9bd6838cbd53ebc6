//! # lowrank-stats
//!
//! Two leaf-level numerical utilities:
//!
//! - [`lowrank`]: SVD-based low-rank factorization of a data matrix, with
//!   truncated reconstruction and variance-explained reporting.
//! - [`interval`]: confidence intervals for a mean (or a difference of
//!   means) using normal or Student's t critical values.
//!
//! All operations are pure functions over immutable inputs; nothing is
//! cached, mutated in place, or shared between calls.
//!
//! ## Matrix orientation
//!
//! Data matrices are row-major in the statistical sense: **rows are
//! observations, columns are variables**. An `m × n` matrix holds `m`
//! observations of `n` variables, and the factorization module keeps this
//! convention everywhere.

pub mod interval;
pub mod lowrank;
pub mod stats;
pub mod svd;
pub mod utils;

pub use interval::{
    difference_confidence_interval, mean_confidence_interval, ConfidenceInterval, IntervalError,
};
pub use lowrank::{decompose, Decomposition, LowRankError};
pub use svd::{jacobi_svd, SvdResult};
pub use utils::{norm_2, norm_frobenius, residual_norm};

// Re-export ndarray types used in the public API
pub use ndarray::{Array1, Array2};

// Type aliases for convenience
pub type Matrix = Array2<f64>;
pub type Vector = Array1<f64>;
