//! Test statistics paired with their reference distribution.

use serde::{Deserialize, Serialize};

/// A computed test statistic together with the distribution its p-value
/// should be evaluated against.
///
/// This is purely a carrier: evaluating the statistic is the business of
/// whatever test produced it. The distribution slot is fully generic, so
/// `statrs` distribution types (or anything else) fit directly.
///
/// # Example
/// ```rust
/// use confidence_rs::TestStatistic;
/// use statrs::distribution::StudentsT;
///
/// let t = StudentsT::new(0.0, 1.0, 12.0).unwrap();
/// let stat = TestStatistic::new(2.18, t);
/// assert_eq!(stat.value, 2.18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestStatistic<T, D> {
    /// The computed statistic
    pub value: T,
    /// The distribution the statistic is evaluated against
    pub distribution: D,
}

impl<T, D> TestStatistic<T, D> {
    /// Pair a statistic with its reference distribution.
    pub fn new(value: T, distribution: D) -> Self {
        Self {
            value,
            distribution,
        }
    }
}
