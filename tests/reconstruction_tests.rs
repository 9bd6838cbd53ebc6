//! Low-rank reconstruction property tests
//!
//! Exercises the decomposition invariants on ill-conditioned (Hilbert),
//! random, rank-deficient, and correlated-column matrices: full-rank round
//! trip, monotone residual improvement, variance-explained bookkeeping, and
//! orthonormality of the factors.

use approx::assert_abs_diff_eq;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

use lowrank_stats::utils::{is_column_orthonormal, singular_values_sorted};
use lowrank_stats::{decompose, residual_norm, Matrix};

/// Hilbert matrix H[i,j] = 1 / (i + j + 1), badly conditioned even at
/// moderate sizes.
fn hilbert(n: usize) -> Matrix {
    Array2::from_shape_fn((n, n), |(i, j)| 1.0 / (i + j + 1) as f64)
}

fn random_matrix<R: Rng>(m: usize, n: usize, rng: &mut R) -> Matrix {
    Array2::from_shape_fn((m, n), |_| StandardNormal.sample(rng))
}

#[test]
fn full_rank_round_trip_hilbert() {
    for n in [3, 5, 8] {
        let y = hilbert(n);
        let d = decompose(&y).unwrap();
        let yhat = d.reconstruct(d.rank()).unwrap();

        let relative = residual_norm(&y, &yhat) / lowrank_stats::norm_frobenius(&y);
        assert!(
            relative < 1e-12,
            "Hilbert {n}x{n} relative reconstruction error {relative}"
        );
    }
}

#[test]
fn full_rank_round_trip_random() {
    let mut rng = StdRng::seed_from_u64(7);
    for (m, n) in [(6, 4), (4, 6), (5, 5), (20, 3)] {
        let y = random_matrix(m, n, &mut rng);
        let d = decompose(&y).unwrap();
        let yhat = d.reconstruct(d.rank()).unwrap();

        let relative = residual_norm(&y, &yhat) / lowrank_stats::norm_frobenius(&y);
        assert!(relative < 1e-12, "{m}x{n} relative error {relative}");
    }
}

#[test]
fn factors_are_orthonormal_and_sorted() {
    let mut rng = StdRng::seed_from_u64(11);
    for (m, n) in [(8, 5), (5, 8), (6, 6)] {
        let y = random_matrix(m, n, &mut rng);
        let d = decompose(&y).unwrap();

        assert!(is_column_orthonormal(&d.u, 1e-10));
        assert!(is_column_orthonormal(&d.v, 1e-10));
        assert!(singular_values_sorted(&d.singular_values, 1e-12));
        assert_eq!(d.rank(), m.min(n));
    }
}

#[test]
fn residual_norm_non_increasing_in_rank() {
    let mut rng = StdRng::seed_from_u64(23);
    let y = random_matrix(10, 6, &mut rng);
    let d = decompose(&y).unwrap();

    let mut previous = f64::INFINITY;
    for k in 0..=d.rank() {
        let yhat = d.reconstruct(k).unwrap();
        let residual = residual_norm(&y, &yhat);
        assert!(
            residual <= previous + 1e-10,
            "residual increased at k={k}: {residual} > {previous}"
        );
        previous = residual;
    }
    // Full rank leaves essentially nothing
    assert!(previous < 1e-10);
}

#[test]
fn variance_explained_accumulates_to_one() {
    let mut rng = StdRng::seed_from_u64(31);
    let y = random_matrix(7, 5, &mut rng);
    let d = decompose(&y).unwrap();

    let mut previous = 0.0;
    for k in 0..=d.rank() {
        let fraction = d.variance_explained(k).unwrap();
        assert!((0.0..=1.0 + 1e-12).contains(&fraction));
        assert!(fraction >= previous - 1e-12);
        previous = fraction;
    }
    assert_abs_diff_eq!(
        d.variance_explained(d.rank()).unwrap(),
        1.0,
        epsilon = 1e-12
    );
}

#[test]
fn correlated_columns_collapse_to_one_component() {
    // Y = [x, x + tiny noise]: the first component carries essentially all
    // of the variance, which is what justifies truncating to k = 1
    let mut rng = StdRng::seed_from_u64(47);
    let m = 50;
    let x: Vec<f64> = (0..m).map(|_| StandardNormal.sample(&mut rng)).collect();
    let noise: Vec<f64> = (0..m).map(|_| StandardNormal.sample(&mut rng)).collect();
    let y = Array2::from_shape_fn((m, 2), |(i, j)| {
        if j == 0 {
            x[i]
        } else {
            x[i] + 1e-8 * noise[i]
        }
    });

    let d = decompose(&y).unwrap();
    let leading = d.variance_explained(1).unwrap();
    assert!(leading > 1.0 - 1e-12, "variance_explained(1) = {leading}");

    // The caller-facing heuristic agrees
    assert_eq!(d.rank_for_variance(0.99).unwrap(), 1);

    // Rank-1 reconstruction is still close to the data
    let yhat = d.reconstruct(1).unwrap();
    let relative = residual_norm(&y, &yhat) / lowrank_stats::norm_frobenius(&y);
    assert!(relative < 1e-6);
}

#[test]
fn rank_deficient_matrix_has_trailing_zero_singular_values() {
    // Third column is the sum of the first two
    let y = Array2::from_shape_fn((6, 3), |(i, j)| match j {
        0 => i as f64 + 1.0,
        1 => (i as f64 + 1.0).powi(2) / 3.0,
        _ => i as f64 + 1.0 + (i as f64 + 1.0).powi(2) / 3.0,
    });

    let d = decompose(&y).unwrap();
    assert!(d.singular_values[2].abs() < 1e-10);
    assert!(d.variance_explained(2).unwrap() > 1.0 - 1e-12);
}
