//! Error types for the confidence-rs library.
//!
//! This module defines the errors produced by validating constructors,
//! sigma conversions, and textual parsing.

use thiserror::Error;

/// The main error type for the confidence-rs library.
///
/// Every fallible constructor and conversion in this crate reports its
/// failure through this enum; the panicking convenience constructors
/// panic with the same messages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfidenceError {
    /// A probability passed to a validating constructor was outside [0, 1].
    #[error("{constructor}: probability must be within [0, 1]")]
    ProbabilityOutOfRange {
        /// The constructor that rejected the value
        constructor: &'static str,
    },

    /// A sigma count passed to a forward sigma conversion was not positive.
    #[error("{function}: number of sigma {value} must be positive")]
    NonPositiveSigma {
        /// The conversion function that rejected the value
        function: &'static str,
        /// The non-positive sigma count
        value: f64,
    },

    /// A textual representation could not be parsed back into its type.
    #[error("cannot parse {input:?} as {target}")]
    Parse {
        /// The type the input was parsed as
        target: &'static str,
        /// The rejected input
        input: String,
    },
}

/// A specialized `Result` type for confidence-rs operations.
///
/// This is a convenience type alias for `Result<T, ConfidenceError>`.
pub type Result<T> = std::result::Result<T, ConfidenceError>;

impl ConfidenceError {
    /// Create an error for a probability outside [0, 1].
    ///
    /// # Example
    /// ```
    /// use confidence_rs::error::ConfidenceError;
    ///
    /// let error = ConfidenceError::out_of_range("PValue::new");
    /// assert!(error.to_string().contains("PValue::new"));
    /// ```
    pub fn out_of_range(constructor: &'static str) -> Self {
        Self::ProbabilityOutOfRange { constructor }
    }

    /// Create an error for a non-positive sigma count.
    ///
    /// # Example
    /// ```
    /// use confidence_rs::error::ConfidenceError;
    ///
    /// let error = ConfidenceError::non_positive_sigma("n_sigma", 0.0);
    /// assert!(error.to_string().contains("n_sigma"));
    /// ```
    pub fn non_positive_sigma(function: &'static str, value: f64) -> Self {
        Self::NonPositiveSigma { function, value }
    }

    /// Create an error for an unparseable textual representation.
    ///
    /// # Example
    /// ```
    /// use confidence_rs::error::ConfidenceError;
    ///
    /// let error = ConfidenceError::parse("PValue", "garbage");
    /// assert!(error.to_string().contains("garbage"));
    /// ```
    pub fn parse(target: &'static str, input: impl Into<String>) -> Self {
        Self::Parse {
            target,
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_error() {
        let error = ConfidenceError::out_of_range("CL::from_significance");
        assert_eq!(
            error.to_string(),
            "CL::from_significance: probability must be within [0, 1]"
        );
    }

    #[test]
    fn test_non_positive_sigma_error() {
        let error = ConfidenceError::non_positive_sigma("n_sigma1", -1.0);
        assert_eq!(
            error.to_string(),
            "n_sigma1: number of sigma -1 must be positive"
        );
    }

    #[test]
    fn test_parse_error() {
        let error = ConfidenceError::parse("CL", "CL::from_significance(oops)");
        assert!(error.to_string().contains("CL::from_significance(oops)"));
        assert!(error.to_string().contains("as CL"));
    }

    #[test]
    fn test_error_clone() {
        let error = ConfidenceError::out_of_range("PValue::new");
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }

    #[test]
    fn test_error_partial_eq() {
        let error1 = ConfidenceError::non_positive_sigma("n_sigma", 0.0);
        let error2 = ConfidenceError::non_positive_sigma("n_sigma", 0.0);
        let error3 = ConfidenceError::non_positive_sigma("n_sigma", -2.0);

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }
}
