//! Vector and matrix norm computations

use ndarray::{Array1, Array2};

/// Compute the 2-norm (Euclidean norm) of a vector
pub fn norm_2(vec: &Array1<f64>) -> f64 {
    vec.iter().map(|&x| x * x).sum::<f64>().sqrt()
}

/// Compute the Frobenius norm of a matrix
pub fn norm_frobenius(mat: &Array2<f64>) -> f64 {
    mat.iter().map(|&x| x * x).sum::<f64>().sqrt()
}

/// Frobenius norm of the elementwise difference `a - b`.
///
/// Panics if the shapes differ (ndarray's broadcasting rules).
pub fn residual_norm(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    norm_frobenius(&(a - b))
}
