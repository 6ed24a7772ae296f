//! Validated probability primitives: p-values and confidence levels.
//!
//! Both types are thin witness wrappers around an ordered numeric scalar,
//! guaranteed to hold a value in [0, 1] once constructed. `CL` additionally
//! carries a deliberately reversed ordering: a higher confidence level
//! compares as greater even though it is *stored* as the smaller
//! significance.

use crate::error::{ConfidenceError, Result};
use num_traits::{One, Zero};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

/// Check the shared [0, 1] invariant using the scalar's own ordering.
///
/// NaN fails both comparisons, so non-finite floats are rejected here too.
fn in_unit_range<T>(value: &T) -> bool
where
    T: Zero + One + PartialOrd,
{
    let zero = T::zero();
    let one = T::one();
    value >= &zero && value <= &one
}

/// A p-value: the probability of the tested hypothesis, in [0, 1].
///
/// Immutable once constructed; equality and ordering compare the contained
/// probability directly (ascending).
///
/// # Example
/// ```rust
/// use confidence_rs::PValue;
///
/// let p = PValue::try_new(0.05).unwrap();
/// assert_eq!(p.value(), 0.05);
/// assert!(PValue::try_new(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PValue<T>(T);

impl<T> PValue<T>
where
    T: Zero + One + PartialOrd,
{
    /// Create a p-value, failing if the probability is outside [0, 1].
    ///
    /// # Errors
    /// Returns [`ConfidenceError::ProbabilityOutOfRange`] if `value` is not
    /// in [0, 1] (NaN counts as out of range).
    pub fn try_new(value: T) -> Result<Self> {
        if in_unit_range(&value) {
            Ok(Self(value))
        } else {
            Err(ConfidenceError::out_of_range("PValue::new"))
        }
    }

    /// Create a p-value, panicking if the probability is outside [0, 1].
    ///
    /// This is the raising form of [`PValue::try_new`].
    ///
    /// # Panics
    /// Panics if `value` is not in [0, 1].
    ///
    /// # Example
    /// ```rust
    /// use confidence_rs::PValue;
    ///
    /// let p = PValue::new(0.01);
    /// assert_eq!(p.value(), 0.01);
    /// ```
    #[must_use]
    pub fn new(value: T) -> Self {
        match Self::try_new(value) {
            Ok(pvalue) => pvalue,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> PValue<T> {
    /// The raw probability.
    #[must_use]
    pub fn value(&self) -> T
    where
        T: Copy,
    {
        self.0
    }

    /// Reinterpret this p-value as a confidence level.
    ///
    /// The probability becomes the confidence level's *significance*
    /// (stored complement), so no re-validation is needed: both types share
    /// the same [0, 1] invariant.
    ///
    /// # Example
    /// ```rust
    /// use confidence_rs::{CL, PValue};
    ///
    /// let p = PValue::new(0.05);
    /// assert_eq!(p.as_cl(), CL::CL95);
    /// ```
    #[must_use]
    pub fn as_cl(self) -> CL<T> {
        CL(self.0)
    }
}

/// A confidence level: the probability that a stated interval contains the
/// true value.
///
/// Internally a `CL` stores the *significance* `1 - confidence` rather than
/// the confidence itself; [`CL::significance`] returns the exact stored
/// value, while [`CL::confidence`] recomputes `1 - significance` and may
/// round. The ordering is by confidence, which means it is *reversed*
/// relative to the stored field: the `CL` with the smaller significance is
/// the greater one.
///
/// # Example
/// ```rust
/// use confidence_rs::CL;
///
/// let cl: CL<f64> = CL::new(0.95);
/// assert!((cl.significance() - 0.05).abs() < 1e-15);
/// assert!(CL::CL99 > CL::CL95);
/// assert!(CL::CL95 > CL::CL90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CL<T>(T);

impl CL<f64> {
    /// The 90% confidence level (significance 0.10).
    pub const CL90: Self = Self(0.10);

    /// The 95% confidence level (significance 0.05).
    pub const CL95: Self = Self(0.05);

    /// The 99% confidence level (significance 0.01).
    pub const CL99: Self = Self(0.01);
}

impl<T> CL<T>
where
    T: Zero + One + PartialOrd,
{
    /// Create a confidence level from the confidence itself, failing if it
    /// is outside [0, 1].
    ///
    /// The value is stored as its complement `1 - confidence`; callers that
    /// already hold the significance should prefer
    /// [`CL::try_from_significance`], which stores it exactly.
    ///
    /// # Errors
    /// Returns [`ConfidenceError::ProbabilityOutOfRange`] if `confidence`
    /// is not in [0, 1].
    pub fn try_new(confidence: T) -> Result<Self>
    where
        T: Sub<Output = T>,
    {
        if in_unit_range(&confidence) {
            Ok(Self(T::one() - confidence))
        } else {
            Err(ConfidenceError::out_of_range("CL::new"))
        }
    }

    /// Create a confidence level from the confidence itself, panicking if
    /// it is outside [0, 1].
    ///
    /// This is the raising form of [`CL::try_new`].
    ///
    /// # Panics
    /// Panics if `confidence` is not in [0, 1].
    #[must_use]
    pub fn new(confidence: T) -> Self
    where
        T: Sub<Output = T>,
    {
        match Self::try_new(confidence) {
            Ok(cl) => cl,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a confidence level from its significance `1 - confidence`,
    /// failing if the significance is outside [0, 1].
    ///
    /// The significance is stored exactly as given.
    ///
    /// # Errors
    /// Returns [`ConfidenceError::ProbabilityOutOfRange`] if `significance`
    /// is not in [0, 1].
    pub fn try_from_significance(significance: T) -> Result<Self> {
        if in_unit_range(&significance) {
            Ok(Self(significance))
        } else {
            Err(ConfidenceError::out_of_range("CL::from_significance"))
        }
    }

    /// Create a confidence level from its significance `1 - confidence`,
    /// panicking if the significance is outside [0, 1].
    ///
    /// This is the raising form of [`CL::try_from_significance`].
    ///
    /// # Panics
    /// Panics if `significance` is not in [0, 1].
    ///
    /// # Example
    /// ```rust
    /// use confidence_rs::CL;
    ///
    /// assert_eq!(CL::from_significance(0.05), CL::CL95);
    /// ```
    #[must_use]
    pub fn from_significance(significance: T) -> Self {
        match Self::try_from_significance(significance) {
            Ok(cl) => cl,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> CL<T> {
    /// The exact stored significance `1 - confidence`.
    #[must_use]
    pub fn significance(&self) -> T
    where
        T: Copy,
    {
        self.0
    }

    /// The confidence level itself, computed as `1 - significance`.
    ///
    /// The subtraction may lose precision for floating-point scalars;
    /// callers that want the exact stored representation should use
    /// [`CL::significance`] instead.
    #[must_use]
    pub fn confidence(&self) -> T
    where
        T: Copy + One + Sub<Output = T>,
    {
        T::one() - self.0
    }

    /// Reinterpret this confidence level as a p-value.
    ///
    /// The stored significance becomes the p-value directly (semantically:
    /// the probability that the hypothesis is false). No re-validation is
    /// needed since both types share the same [0, 1] invariant.
    ///
    /// # Example
    /// ```rust
    /// use confidence_rs::{CL, PValue};
    ///
    /// assert_eq!(CL::CL95.as_pvalue(), PValue::new(0.05));
    /// ```
    #[must_use]
    pub fn as_pvalue(self) -> PValue<T> {
        PValue(self.0)
    }
}

impl<T> From<PValue<T>> for CL<T> {
    fn from(pvalue: PValue<T>) -> Self {
        pvalue.as_cl()
    }
}

impl<T> From<CL<T>> for PValue<T> {
    fn from(cl: CL<T>) -> Self {
        cl.as_pvalue()
    }
}

impl TryFrom<f64> for PValue<f64> {
    type Error = ConfidenceError;

    fn try_from(value: f64) -> Result<Self> {
        Self::try_new(value)
    }
}

/// The significance (not the confidence) is the canonical probability form
/// of a `CL`, so conversion from a bare scalar goes through it.
impl TryFrom<f64> for CL<f64> {
    type Error = ConfidenceError;

    fn try_from(significance: f64) -> Result<Self> {
        Self::try_from_significance(significance)
    }
}

// Ordering by confidence: the smaller the stored significance, the greater
// the confidence level. `min`/`max` through `Ord` therefore select by the
// larger/smaller stored significance respectively.

impl<T: PartialOrd> PartialOrd for CL<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.0.partial_cmp(&self.0)
    }
}

impl<T: Ord> Ord for CL<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

// Textual representations render the reconstruction expression through the
// canonical from-probability constructor, and the parsers accept exactly
// that form, re-running the validating constructor.

impl<T: fmt::Display> fmt::Display for PValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PValue::new({})", self.0)
    }
}

impl<T: fmt::Display> fmt::Display for CL<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CL::from_significance({})", self.0)
    }
}

impl<T> FromStr for PValue<T>
where
    T: FromStr + Zero + One + PartialOrd,
{
    type Err = ConfidenceError;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .strip_prefix("PValue::new(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ConfidenceError::parse("PValue", s))?;
        let value: T = inner
            .trim()
            .parse()
            .map_err(|_| ConfidenceError::parse("PValue", s))?;
        Self::try_new(value)
    }
}

impl<T> FromStr for CL<T>
where
    T: FromStr + Zero + One + PartialOrd,
{
    type Err = ConfidenceError;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .strip_prefix("CL::from_significance(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ConfidenceError::parse("CL", s))?;
        let significance: T = inner
            .trim()
            .parse()
            .map_err(|_| ConfidenceError::parse("CL", s))?;
        Self::try_from_significance(significance)
    }
}

// Serde: encode as the bare scalar; decoding re-runs the range check and
// fails the decode rather than clamping.

impl<T: Serialize> Serialize for PValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for PValue<T>
where
    T: Deserialize<'de> + Zero + One + PartialOrd,
{
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Self::try_new(value).map_err(serde::de::Error::custom)
    }
}

impl<T: Serialize> Serialize for CL<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for CL<T>
where
    T: Deserialize<'de> + Zero + One + PartialOrd,
{
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let significance = T::deserialize(deserializer)?;
        Self::try_from_significance(significance).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pvalue_accepts_unit_range() {
        for p in [0.0, 0.25, 0.5, 1.0] {
            assert!(PValue::try_new(p).is_ok());
        }
    }

    #[test]
    fn test_pvalue_rejects_out_of_range() {
        assert!(PValue::try_new(-0.1).is_err());
        assert!(PValue::try_new(1.1).is_err());
        assert!(PValue::try_new(f64::NAN).is_err());
        assert!(PValue::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_cl_accepts_unit_range() {
        for c in [0.0, 0.5, 0.95, 1.0] {
            assert!(CL::try_new(c).is_ok());
            assert!(CL::try_from_significance(c).is_ok());
        }
    }

    #[test]
    fn test_cl_rejects_out_of_range() {
        assert!(CL::try_new(-0.1).is_err());
        assert!(CL::try_new(1.5).is_err());
        assert!(CL::try_from_significance(-0.1).is_err());
        assert!(CL::try_from_significance(1.5).is_err());
        assert!(CL::try_from_significance(f64::NAN).is_err());
    }

    #[test]
    fn test_integer_scalars_validate() {
        assert!(PValue::try_new(0_i64).is_ok());
        assert!(PValue::try_new(1_i64).is_ok());
        assert!(PValue::try_new(2_i64).is_err());
        assert!(PValue::try_new(-1_i64).is_err());
    }

    #[test]
    #[should_panic(expected = "PValue::new: probability must be within [0, 1]")]
    fn test_pvalue_new_panics() {
        let _ = PValue::new(1.5);
    }

    #[test]
    #[should_panic(expected = "CL::from_significance: probability must be within [0, 1]")]
    fn test_cl_from_significance_panics() {
        let _ = CL::from_significance(-0.5);
    }

    #[test]
    fn test_confidence_round_trip() {
        for c in [0.0, 0.5, 0.9, 0.95, 0.99, 1.0] {
            let cl = CL::new(c);
            assert_relative_eq!(cl.confidence(), c, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_significance_stored_exactly() {
        let cl = CL::from_significance(0.05);
        assert_eq!(cl.significance(), 0.05);
        assert_eq!(cl, CL::CL95);
    }

    #[test]
    fn test_pvalue_cl_conversions_are_inverse() {
        let p = PValue::new(0.03);
        assert_eq!(p.as_cl().as_pvalue(), p);

        let cl = CL::from_significance(0.07);
        assert_eq!(cl.as_pvalue().as_cl(), cl);
    }

    #[test]
    fn test_from_impls_match_methods() {
        let p = PValue::new(0.2);
        assert_eq!(CL::from(p), p.as_cl());
        assert_eq!(PValue::from(CL::CL90), CL::CL90.as_pvalue());
    }

    #[test]
    fn test_cl_ordering_is_by_confidence() {
        assert!(CL::CL99 > CL::CL95);
        assert!(CL::CL95 > CL::CL90);
        assert!(CL::CL90 > CL::new(0.5));

        // Smaller stored significance means greater confidence level.
        let tight = CL::from_significance(0.01);
        let loose = CL::from_significance(0.2);
        assert!(tight > loose);
        assert!(loose < tight);
    }

    #[test]
    fn test_cl_min_max_through_ord() {
        let a = CL::from_significance(1_u32);
        let b = CL::from_significance(0_u32);
        assert_eq!(a.max(b), b);
        assert_eq!(a.min(b), a);
    }

    #[test]
    fn test_pvalue_ordering_ascending() {
        assert!(PValue::new(0.01) < PValue::new(0.05));
        assert!(PValue::new(1.0) > PValue::new(0.0));
    }

    #[test]
    fn test_display_renders_constructor_form() {
        assert_eq!(PValue::new(0.05).to_string(), "PValue::new(0.05)");
        assert_eq!(CL::CL95.to_string(), "CL::from_significance(0.05)");
    }

    #[test]
    fn test_from_str_round_trip() {
        let p = PValue::new(0.05);
        let parsed: PValue<f64> = p.to_string().parse().unwrap();
        assert_eq!(parsed, p);

        let cl = CL::CL99;
        let parsed: CL<f64> = cl.to_string().parse().unwrap();
        assert_eq!(parsed, cl);
    }

    #[test]
    fn test_from_str_rejects_malformed_input() {
        assert!("0.05".parse::<PValue<f64>>().is_err());
        assert!("PValue::new(abc)".parse::<PValue<f64>>().is_err());
        assert!("CL::new(0.95)".parse::<CL<f64>>().is_err());
    }

    #[test]
    fn test_from_str_revalidates_range() {
        let err = "PValue::new(1.5)".parse::<PValue<f64>>().unwrap_err();
        assert_eq!(err, ConfidenceError::out_of_range("PValue::new"));

        let err = "CL::from_significance(-0.2)".parse::<CL<f64>>().unwrap_err();
        assert_eq!(err, ConfidenceError::out_of_range("CL::from_significance"));
    }

    #[test]
    fn test_named_constants() {
        assert_eq!(CL::CL90.significance(), 0.10);
        assert_eq!(CL::CL95.significance(), 0.05);
        assert_eq!(CL::CL99.significance(), 0.01);
    }
}
