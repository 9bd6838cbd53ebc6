//! Low-rank matrix factorization and reconstruction
//!
//! Wraps the Jacobi SVD in a small dimension-reduction API: factor a data
//! matrix once, then reconstruct it at any truncation rank `k` and report
//! how much of the total variance the leading `k` components carry.
//!
//! Rows are observations and columns are variables throughout. The module
//! never chooses a truncation rank on its own; `k` is always caller
//! policy, with [`Decomposition::rank_for_variance`] available as an
//! explicit cumulative-variance heuristic.

use ndarray::{s, Array1, Array2};

use crate::svd::jacobi_svd;

/// Error types for decomposition and reconstruction
#[derive(Debug, thiserror::Error)]
pub enum LowRankError {
    /// The input matrix has no rows or no columns. Non-rectangular input is
    /// unrepresentable in `Array2`, so emptiness is the only dimension
    /// failure.
    #[error("matrix is empty ({rows} x {cols})")]
    InvalidDimension { rows: usize, cols: usize },

    /// Requested truncation rank exceeds `min(m, n)`.
    #[error("truncation rank {rank} out of range (max {max})")]
    RankOutOfRange { rank: usize, max: usize },

    /// All singular values are zero, so variance fractions are undefined.
    #[error("degenerate input: all singular values are zero")]
    DegenerateInput,

    /// Variance threshold outside `(0, 1]`.
    #[error("variance threshold must be in (0, 1], got {0}")]
    InvalidThreshold(f64),
}

/// Thin SVD of a data matrix, `Y = U * diag(s) * V^T`.
///
/// `U` is `m × p` and `V` is `n × p` with `p = min(m, n)`; singular values
/// are non-negative and descending. Computed fresh per call, never mutated.
#[derive(Debug, Clone)]
pub struct Decomposition {
    /// Left singular vectors (m × p)
    pub u: Array2<f64>,
    /// Singular values (p), descending
    pub singular_values: Array1<f64>,
    /// Right singular vectors (n × p)
    pub v: Array2<f64>,
}

/// Factor a data matrix into its thin SVD.
///
/// # Errors
/// `LowRankError::InvalidDimension` if the matrix has no rows or columns.
pub fn decompose(matrix: &Array2<f64>) -> Result<Decomposition, LowRankError> {
    let (m, n) = (matrix.nrows(), matrix.ncols());
    if m == 0 || n == 0 {
        return Err(LowRankError::InvalidDimension { rows: m, cols: n });
    }

    let result = jacobi_svd(matrix);
    Ok(Decomposition {
        u: result.u,
        singular_values: result.s,
        v: result.v,
    })
}

impl Decomposition {
    /// Number of components, `p = min(m, n)`.
    pub fn rank(&self) -> usize {
        self.singular_values.len()
    }

    /// Reconstruct the data matrix from the leading `k` components:
    /// `Yhat = U[:, :k] * diag(s[:k]) * V[:, :k]^T`.
    ///
    /// `k = 0` yields the zero matrix; `k = p` reproduces the input up to
    /// floating-point rounding. The residual Frobenius norm `||Y - Yhat||`
    /// is non-increasing in `k`.
    pub fn reconstruct(&self, k: usize) -> Result<Array2<f64>, LowRankError> {
        let p = self.rank();
        if k > p {
            return Err(LowRankError::RankOutOfRange { rank: k, max: p });
        }

        let u_k = self.u.slice(s![.., ..k]);
        let v_k = self.v.slice(s![.., ..k]);
        let d_k = Array2::from_diag(&self.singular_values.slice(s![..k]).to_owned());
        Ok(u_k.dot(&d_k).dot(&v_k.t()))
    }

    /// Fraction of total variance carried by the leading `k` components:
    /// `sum(s[..k]^2) / sum(s^2)`, in `[0, 1]`.
    ///
    /// # Errors
    /// `LowRankError::DegenerateInput` when all singular values are zero,
    /// `LowRankError::RankOutOfRange` when `k > p`.
    pub fn variance_explained(&self, k: usize) -> Result<f64, LowRankError> {
        let p = self.rank();
        if k > p {
            return Err(LowRankError::RankOutOfRange { rank: k, max: p });
        }

        let total: f64 = self.singular_values.iter().map(|&x| x * x).sum();
        if total == 0.0 {
            return Err(LowRankError::DegenerateInput);
        }

        let leading: f64 = self
            .singular_values
            .iter()
            .take(k)
            .map(|&x| x * x)
            .sum();
        Ok(leading / total)
    }

    /// Smallest `k` whose cumulative variance fraction reaches `threshold`.
    ///
    /// This is an explicit, opt-in truncation heuristic; nothing in the
    /// crate applies it implicitly. `threshold` must lie in `(0, 1]`.
    pub fn rank_for_variance(&self, threshold: f64) -> Result<usize, LowRankError> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(LowRankError::InvalidThreshold(threshold));
        }

        let total: f64 = self.singular_values.iter().map(|&x| x * x).sum();
        if total == 0.0 {
            return Err(LowRankError::DegenerateInput);
        }

        let mut cumulative = 0.0;
        for (i, &x) in self.singular_values.iter().enumerate() {
            cumulative += x * x;
            if cumulative / total >= threshold {
                return Ok(i + 1);
            }
        }
        // Rounding can leave the cumulative fraction a hair under 1.0
        Ok(self.rank())
    }
}
