//! Norms and decomposition validation helpers

pub mod norms;
pub mod validation;

pub use norms::{norm_2, norm_frobenius, residual_norm};
pub use validation::{is_column_orthonormal, singular_values_sorted};
