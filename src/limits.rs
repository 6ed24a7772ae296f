//! One-sided limits at a stated confidence level.
//!
//! Used when a measurement cannot pin a quantity down from one side: an
//! upper limit when the value cannot be distinguished from zero, a lower
//! limit when it cannot be distinguished from being arbitrarily large.
//! The only enforced invariant is the [0, 1] range of the confidence
//! level, carried transitively by [`CL`]'s own constructors.

use crate::probability::CL;
use serde::{Deserialize, Serialize};

/// An upper bound on a quantity at a stated confidence level.
///
/// # Example
/// ```rust
/// use confidence_rs::{UpperLimit, CL};
///
/// // Signal cross-section consistent with zero; quote a 95% upper limit.
/// let limit = UpperLimit::new(0.17, CL::CL95);
/// assert_eq!(limit.limit, 0.17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpperLimit<T> {
    /// The upper bound
    pub limit: T,
    /// Confidence level of the limit
    pub confidence_level: CL<f64>,
}

impl<T> UpperLimit<T> {
    /// Tag a bound with its confidence level. The bound itself is not
    /// range-checked.
    pub fn new(limit: T, confidence_level: CL<f64>) -> Self {
        Self {
            limit,
            confidence_level,
        }
    }
}

/// A lower bound on a quantity at a stated confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LowerLimit<T> {
    /// The lower bound
    pub limit: T,
    /// Confidence level of the limit
    pub confidence_level: CL<f64>,
}

impl<T> LowerLimit<T> {
    /// Tag a bound with its confidence level. The bound itself is not
    /// range-checked.
    pub fn new(limit: T, confidence_level: CL<f64>) -> Self {
        Self {
            limit,
            confidence_level,
        }
    }
}
