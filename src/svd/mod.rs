//! Singular value decomposition

pub mod jacobi;

pub use jacobi::{jacobi_svd, SvdResult};
