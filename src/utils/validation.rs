//! Decomposition result validation

use ndarray::{Array1, Array2};

/// Check that the columns of a matrix are orthonormal (`M^T M = I`).
pub fn is_column_orthonormal(matrix: &Array2<f64>, tolerance: f64) -> bool {
    let k = matrix.ncols();
    for i in 0..k {
        for j in 0..k {
            let dot = matrix.column(i).dot(&matrix.column(j));
            let expected = if i == j { 1.0 } else { 0.0 };
            if (dot - expected).abs() > tolerance {
                return false;
            }
        }
    }
    true
}

/// Check that singular values are non-negative and sorted descending.
pub fn singular_values_sorted(s: &Array1<f64>, tolerance: f64) -> bool {
    for &x in s.iter() {
        if x < -tolerance {
            return false;
        }
    }
    for w in s.iter().zip(s.iter().skip(1)) {
        if *w.0 < *w.1 - tolerance {
            return false;
        }
    }
    true
}
