//! Conversions between confidence levels and "number of standard
//! deviations" under the standard normal distribution.
//!
//! Physical sciences often quote confidence as `nσ`: the probability mass
//! beyond `n` standard deviations from the mean of a normal distribution.
//! The two-tailed forms count both tails, the one-tailed forms a single
//! tail. The forward conversions require `n > 0`; the inverse conversions
//! are total.

use crate::error::{ConfidenceError, Result};
use crate::probability::CL;
use statrs::distribution::{ContinuousCDF, Normal};

fn standard_normal() -> Normal {
    Normal::new(0.0, 1.0).unwrap()
}

/// Confidence level corresponding to `n` standard deviations, two-tailed.
///
/// The resulting significance is `2·Φ(−n)`, the probability mass in both
/// tails beyond `±n`.
///
/// # Errors
/// Returns [`ConfidenceError::NonPositiveSigma`] if `n ≤ 0` (or NaN).
pub fn try_n_sigma(n: f64) -> Result<CL<f64>> {
    if n > 0.0 {
        Ok(CL::from_significance(2.0 * standard_normal().cdf(-n)))
    } else {
        Err(ConfidenceError::non_positive_sigma("n_sigma", n))
    }
}

/// Confidence level corresponding to `n` standard deviations, two-tailed.
///
/// This is the raising form of [`try_n_sigma`].
///
/// # Panics
/// Panics if `n ≤ 0`.
///
/// # Example
/// ```rust
/// use confidence_rs::{sigma::n_sigma, CL};
///
/// // 1.96σ is the familiar 95% two-sided level.
/// let cl = n_sigma(1.9599639845400545);
/// assert!((cl.significance() - CL::CL95.significance()).abs() < 1e-9);
/// ```
#[must_use]
pub fn n_sigma(n: f64) -> CL<f64> {
    match try_n_sigma(n) {
        Ok(cl) => cl,
        Err(e) => panic!("{e}"),
    }
}

/// Confidence level corresponding to `n` standard deviations, one-tailed.
///
/// The resulting significance is `Φ(−n)`, the probability mass in a single
/// tail beyond `n`.
///
/// # Errors
/// Returns [`ConfidenceError::NonPositiveSigma`] if `n ≤ 0` (or NaN).
pub fn try_n_sigma1(n: f64) -> Result<CL<f64>> {
    if n > 0.0 {
        Ok(CL::from_significance(standard_normal().cdf(-n)))
    } else {
        Err(ConfidenceError::non_positive_sigma("n_sigma1", n))
    }
}

/// Confidence level corresponding to `n` standard deviations, one-tailed.
///
/// This is the raising form of [`try_n_sigma1`].
///
/// # Panics
/// Panics if `n ≤ 0`.
#[must_use]
pub fn n_sigma1(n: f64) -> CL<f64> {
    match try_n_sigma1(n) {
        Ok(cl) => cl,
        Err(e) => panic!("{e}"),
    }
}

/// Number of standard deviations corresponding to a confidence level,
/// two-tailed. Inverse of [`n_sigma`].
#[must_use]
pub fn get_n_sigma(cl: CL<f64>) -> f64 {
    -standard_normal().inverse_cdf(cl.significance() / 2.0)
}

/// Number of standard deviations corresponding to a confidence level,
/// one-tailed. Inverse of [`n_sigma1`].
#[must_use]
pub fn get_n_sigma1(cl: CL<f64>) -> f64 {
    -standard_normal().inverse_cdf(cl.significance())
}
