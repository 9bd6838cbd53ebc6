//! One-sided Jacobi SVD
//!
//! Computes the thin SVD `A = U * diag(s) * V^T` by Hestenes' one-sided
//! Jacobi method: plane rotations are applied on the right until all column
//! pairs of the working matrix are numerically orthogonal, at which point
//! the column norms are the singular values. Slower than bidiagonalization
//! but simple and accurate, and it needs no external LAPACK backend.

use ndarray::{Array1, Array2};

/// Maximum number of full sweeps over all column pairs.
const MAX_SWEEPS: usize = 30;

/// Relative orthogonality threshold for convergence.
const ORTHO_TOL: f64 = 1e-14;

/// Result of SVD decomposition
#[derive(Debug, Clone)]
pub struct SvdResult {
    /// Left singular vectors (m × p)
    pub u: Array2<f64>,
    /// Singular values (p), non-negative, descending
    pub s: Array1<f64>,
    /// Right singular vectors (n × p)
    pub v: Array2<f64>,
}

/// Compute the thin SVD of a real matrix.
///
/// Returns `U` (m × p), `s` (p, descending) and `V` (n × p) with
/// `p = min(m, n)`, such that `A = U * diag(s) * V^T`. Columns of `U` and
/// `V` whose singular value is nonzero are orthonormal; an exactly-zero
/// singular value leaves a zero column in `U`.
///
/// Wide matrices (`m < n`) are handled by factoring the transpose and
/// swapping the roles of `U` and `V`.
pub fn jacobi_svd(matrix: &Array2<f64>) -> SvdResult {
    let (m, n) = (matrix.nrows(), matrix.ncols());

    if m >= n {
        let (u, s, v) = one_sided_jacobi(matrix.clone());
        SvdResult { u, s, v }
    } else {
        // A^T = U' S V'^T  =>  A = V' S U'^T
        let (u_t, s, v_t) = one_sided_jacobi(matrix.t().to_owned());
        SvdResult { u: v_t, s, v: u_t }
    }
}

/// One-sided Jacobi on a tall-or-square matrix (m >= n).
///
/// Orthogonalizes the columns of the working copy `b` by right rotations,
/// accumulating the rotations into `v`. On exit the column norms of `b` are
/// the singular values and its normalized columns are the left singular
/// vectors.
fn one_sided_jacobi(mut b: Array2<f64>) -> (Array2<f64>, Array1<f64>, Array2<f64>) {
    let (m, n) = (b.nrows(), b.ncols());
    let mut v: Array2<f64> = Array2::eye(n);

    for _sweep in 0..MAX_SWEEPS {
        let mut converged = true;

        for p in 0..n {
            for q in (p + 1)..n {
                let mut alpha = 0.0; // <b_p, b_p>
                let mut beta = 0.0; // <b_q, b_q>
                let mut gamma = 0.0; // <b_p, b_q>
                for i in 0..m {
                    let bp = b[[i, p]];
                    let bq = b[[i, q]];
                    alpha += bp * bp;
                    beta += bq * bq;
                    gamma += bp * bq;
                }

                // Columns already orthogonal to working precision
                if gamma.abs() <= ORTHO_TOL * (alpha * beta).sqrt() {
                    continue;
                }
                converged = false;

                // Rotation angle zeroing <b_p, b_q>, smaller-root choice
                // keeps |t| <= 1 for numerical stability
                let zeta = (beta - alpha) / (2.0 * gamma);
                let t = zeta.signum() / (zeta.abs() + (1.0 + zeta * zeta).sqrt());
                let c = 1.0 / (1.0 + t * t).sqrt();
                let s = c * t;

                rotate_columns(&mut b, p, q, c, s);
                rotate_columns(&mut v, p, q, c, s);
            }
        }

        if converged {
            break;
        }
    }

    // Extract singular values as column norms and normalize U
    let mut sv = Array1::zeros(n);
    let mut u = Array2::zeros((m, n));
    for j in 0..n {
        let mut norm_sq = 0.0;
        for i in 0..m {
            norm_sq += b[[i, j]] * b[[i, j]];
        }
        let norm = norm_sq.sqrt();
        sv[j] = norm;
        if norm > 0.0 {
            for i in 0..m {
                u[[i, j]] = b[[i, j]] / norm;
            }
        }
    }

    // Sort singular values in descending order, permuting U and V columns
    let mut indices: Vec<usize> = (0..n).collect();
    indices.sort_by(|&a, &b| {
        sv[b]
            .partial_cmp(&sv[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut s_sorted = Array1::zeros(n);
    let mut u_sorted = Array2::zeros((m, n));
    let mut v_sorted = Array2::zeros((n, n));
    for (new_idx, &old_idx) in indices.iter().enumerate() {
        s_sorted[new_idx] = sv[old_idx];
        u_sorted.column_mut(new_idx).assign(&u.column(old_idx));
        v_sorted.column_mut(new_idx).assign(&v.column(old_idx));
    }

    (u_sorted, s_sorted, v_sorted)
}

/// Apply the plane rotation `[c -s; s c]` to columns `p` and `q`.
fn rotate_columns(matrix: &mut Array2<f64>, p: usize, q: usize, c: f64, s: f64) {
    let m = matrix.nrows();
    for i in 0..m {
        let xp = matrix[[i, p]];
        let xq = matrix[[i, q]];
        matrix[[i, p]] = c * xp - s * xq;
        matrix[[i, q]] = s * xp + c * xq;
    }
}
