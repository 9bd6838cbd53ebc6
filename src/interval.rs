//! Confidence intervals for means
//!
//! Constructs two-sided confidence intervals for a sample mean, or for a
//! difference of two sample means, as `estimate ± Q * SE`. The critical
//! value `Q` comes from either the standard normal distribution or
//! Student's t with the appropriate degrees of freedom.
//!
//! The normal choice is only calibrated asymptotically (it leans on the
//! Central Limit Theorem): for small samples its intervals are too narrow
//! and cover the true mean less often than the nominal level. The t choice
//! corrects this with heavier tails, at the cost of wider intervals. The
//! coverage simulations in `tests/coverage_tests.rs` demonstrate both
//! behaviors.
//!
//! Difference intervals use the Welch (unpooled) standard error
//! `sqrt(s_a^2/N_a + s_b^2/N_b)` with Welch-Satterthwaite degrees of
//! freedom, which drops the equal-variance assumption a pooled estimate
//! would require.

use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

use crate::stats::{mean, sample_variance, standard_error};

/// Error types for interval construction
#[derive(Debug, thiserror::Error)]
pub enum IntervalError {
    #[error("sample too short: need at least 2 observations, got {0}")]
    InsufficientSampleSize(usize),

    #[error("confidence level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),

    /// Zero-variance or non-finite sample: the standard error is zero or
    /// undefined, so no interval exists.
    #[error("degenerate sample: standard error is zero or undefined")]
    DegenerateSample,

    #[error("quantile evaluation failed: {0}")]
    Quantile(String),
}

/// A two-sided confidence interval, tagged with its confidence level and
/// critical-value source (`degrees_of_freedom: None` means the normal
/// quantile was used, `Some(df)` means Student's t).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
    pub confidence_level: f64,
    pub degrees_of_freedom: Option<f64>,
}

impl ConfidenceInterval {
    /// Whether the interval lies strictly on one side of zero.
    ///
    /// For a `100 * (1 - alpha)%` difference interval this is equivalent to
    /// rejecting "the means are equal" in the corresponding two-sided test
    /// at level `alpha`; the duality is exercised in the integration tests.
    pub fn excludes_zero(&self) -> bool {
        self.lower > 0.0 || self.upper < 0.0
    }

    /// Whether the interval contains `x` (closed on both ends).
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn center(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }
}

/// Confidence interval for the mean of a single sample.
///
/// Computes `mean ± Q * s / sqrt(N)` where `s` is the sample standard
/// deviation (divisor `N - 1`). With `use_t` false, `Q` is the two-sided
/// normal quantile; with `use_t` true, the t quantile with `N - 1` degrees
/// of freedom.
///
/// # Errors
/// `InsufficientSampleSize` for `N < 2`, `InvalidConfidenceLevel` outside
/// the open interval `(0, 1)`, `DegenerateSample` for zero-variance or
/// non-finite data.
pub fn mean_confidence_interval(
    sample: &[f64],
    confidence_level: f64,
    use_t: bool,
) -> Result<ConfidenceInterval, IntervalError> {
    let n = sample.len();
    if n < 2 {
        return Err(IntervalError::InsufficientSampleSize(n));
    }
    validate_confidence_level(confidence_level)?;

    let center = mean(sample).ok_or(IntervalError::DegenerateSample)?;
    let se = standard_error(sample).ok_or(IntervalError::DegenerateSample)?;
    if se == 0.0 {
        return Err(IntervalError::DegenerateSample);
    }

    let df = use_t.then(|| (n - 1) as f64);
    let q = critical_value(confidence_level, df)?;

    Ok(ConfidenceInterval {
        lower: center - q * se,
        upper: center + q * se,
        confidence_level,
        degrees_of_freedom: df,
    })
}

/// Confidence interval for the difference of means, `mean(B) - mean(A)`.
///
/// Uses the Welch standard error `sqrt(s_a^2/N_a + s_b^2/N_b)`; in the t
/// case the degrees of freedom follow the Welch-Satterthwaite
/// approximation.
pub fn difference_confidence_interval(
    sample_a: &[f64],
    sample_b: &[f64],
    confidence_level: f64,
    use_t: bool,
) -> Result<ConfidenceInterval, IntervalError> {
    let (n_a, n_b) = (sample_a.len(), sample_b.len());
    if n_a < 2 {
        return Err(IntervalError::InsufficientSampleSize(n_a));
    }
    if n_b < 2 {
        return Err(IntervalError::InsufficientSampleSize(n_b));
    }
    validate_confidence_level(confidence_level)?;

    let mean_a = mean(sample_a).ok_or(IntervalError::DegenerateSample)?;
    let mean_b = mean(sample_b).ok_or(IntervalError::DegenerateSample)?;
    let var_a = sample_variance(sample_a).ok_or(IntervalError::DegenerateSample)?;
    let var_b = sample_variance(sample_b).ok_or(IntervalError::DegenerateSample)?;

    let term_a = var_a / n_a as f64;
    let term_b = var_b / n_b as f64;
    let se = (term_a + term_b).sqrt();
    if se == 0.0 {
        return Err(IntervalError::DegenerateSample);
    }

    let df = use_t.then(|| welch_satterthwaite_df(term_a, n_a, term_b, n_b));
    let q = critical_value(confidence_level, df)?;

    let center = mean_b - mean_a;
    Ok(ConfidenceInterval {
        lower: center - q * se,
        upper: center + q * se,
        confidence_level,
        degrees_of_freedom: df,
    })
}

/// Welch-Satterthwaite degrees of freedom from the per-sample variance
/// terms `s^2 / N`.
fn welch_satterthwaite_df(term_a: f64, n_a: usize, term_b: f64, n_b: usize) -> f64 {
    let numerator = (term_a + term_b).powi(2);
    let denominator =
        term_a.powi(2) / (n_a - 1) as f64 + term_b.powi(2) / (n_b - 1) as f64;
    numerator / denominator
}

/// Two-sided critical value at the given level: the `1 - alpha/2` quantile
/// of the standard normal (`df = None`) or of Student's t (`df = Some`).
fn critical_value(confidence_level: f64, df: Option<f64>) -> Result<f64, IntervalError> {
    let alpha = 1.0 - confidence_level;
    let p = 1.0 - alpha / 2.0;

    match df {
        None => {
            let normal = Normal::new(0.0, 1.0)
                .map_err(|e| IntervalError::Quantile(e.to_string()))?;
            Ok(normal.inverse_cdf(p))
        }
        Some(df) => {
            let t = StudentsT::new(0.0, 1.0, df)
                .map_err(|e| IntervalError::Quantile(e.to_string()))?;
            Ok(t.inverse_cdf(p))
        }
    }
}

fn validate_confidence_level(level: f64) -> Result<(), IntervalError> {
    if !(level > 0.0 && level < 1.0) {
        return Err(IntervalError::InvalidConfidenceLevel(level));
    }
    Ok(())
}
