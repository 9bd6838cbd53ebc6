//! Descriptive statistics
//!
//! Mean, sample variance and standard error over `f64` slices. Variance
//! uses Welford's online algorithm (divisor `n - 1`), which avoids the
//! catastrophic cancellation of the naive `E[X^2] - E[X]^2` formula.
//!
//! All functions return `None` when the input is too short or contains a
//! non-finite value; the interval module maps those onto its error enum.

/// Arithmetic mean. `None` on empty or non-finite input.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !all_finite(data) {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Unbiased sample variance (divisor `n - 1`), via Welford's algorithm.
/// `None` when `data.len() < 2` or the input is non-finite.
pub fn sample_variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 || !all_finite(data) {
        return None;
    }

    let mut count = 0usize;
    let mut running_mean = 0.0;
    let mut m2 = 0.0;
    for &x in data {
        count += 1;
        let delta = x - running_mean;
        running_mean += delta / count as f64;
        m2 += delta * (x - running_mean);
    }
    Some(m2 / (count - 1) as f64)
}

/// Sample standard deviation. `None` when `data.len() < 2`.
pub fn sample_std(data: &[f64]) -> Option<f64> {
    sample_variance(data).map(f64::sqrt)
}

/// Standard error of the mean, `s / sqrt(n)`. `None` when `data.len() < 2`.
pub fn standard_error(data: &[f64]) -> Option<f64> {
    sample_std(data).map(|s| s / (data.len() as f64).sqrt())
}

fn all_finite(data: &[f64]) -> bool {
    data.iter().all(|x| x.is_finite())
}
