//! Point estimates and the error models that qualify them.
//!
//! An [`Estimate`] pairs a point value with one of three error
//! representations: a symmetric normal error ([`NormalErr`]), a Student-t
//! distributed error ([`TErr`]), or an asymmetric confidence interval
//! ([`ConfInt`]). The error-model slot is an ordinary type parameter, so
//! any representation with the right capabilities plugs in.
//!
//! Unlike the probability primitives, the error models have no validating
//! constructors: callers are trusted to supply physically sensible values
//! (non-negative deltas, bounds that bracket the point). That permissiveness
//! is a documented caller responsibility, not an oversight.

use crate::probability::CL;
use num_traits::Signed;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Symmetric error: a single 1σ width under a normal model.
///
/// # Example
/// ```rust
/// use confidence_rs::{NormalErr, Scale};
///
/// let err = NormalErr::new(3.0);
/// assert_eq!(err.scale(-2.0), NormalErr::new(6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalErr<T> {
    /// The 1σ error width
    pub sigma: T,
}

impl<T> NormalErr<T> {
    /// Wrap a 1σ error width. The value is not range-checked.
    pub fn new(sigma: T) -> Self {
        Self { sigma }
    }
}

/// Student-t distributed error, or an explicit placeholder when the error
/// model has not been determined yet (e.g. before a fitting procedure
/// assigns one).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TErr<T> {
    /// Error following a Student-t distribution with the given number of
    /// degrees of freedom.
    Student {
        /// The 1σ error width
        sigma: T,
        /// Degrees of freedom of the Student-t distribution
        ndf: f64,
    },
    /// The error model is not yet known.
    Unknown,
}

/// Asymmetric error: a contiguous confidence interval around the point
/// estimate, tied to one specific confidence level.
///
/// Both deltas are *distances* from the point to the corresponding bound
/// and are expected to be non-negative, but this is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfInt<T> {
    /// Distance from the point estimate down to the lower bound
    pub lower_delta: T,
    /// Distance from the point estimate up to the upper bound
    pub upper_delta: T,
    /// The confidence level the interval is stated at
    pub confidence_level: CL<f64>,
}

impl<T> ConfInt<T> {
    /// Build an interval from its deltas and confidence level. The deltas
    /// are used as-is, without range checks.
    pub fn new(lower_delta: T, upper_delta: T, confidence_level: CL<f64>) -> Self {
        Self {
            lower_delta,
            upper_delta,
            confidence_level,
        }
    }
}

/// A point estimate together with its error representation.
///
/// `E` is the error model (one of [`NormalErr`], [`TErr`], [`ConfInt`], or
/// any compatible type) and `T` the underlying scalar.
///
/// # Example
/// ```rust
/// use confidence_rs::{pm, Scale};
///
/// let distance = pm(144.0, 5.0);
/// assert_eq!(distance.scale(2.0), pm(288.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Estimate<E, T> {
    /// The point estimate
    pub point: T,
    /// The attached error representation
    pub error: E,
}

impl<E, T> Estimate<E, T> {
    /// Pair a point value with an arbitrary error representation.
    pub fn new(point: T, error: E) -> Self {
        Self { point, error }
    }
}

impl<T> Estimate<NormalErr<T>, T> {
    /// Estimate with a symmetric 1σ normal error.
    pub fn with_normal_error(point: T, sigma: T) -> Self {
        Self {
            point,
            error: NormalErr::new(sigma),
        }
    }
}

/// Shorthand for [`Estimate::with_normal_error`], standing in for the
/// conventional `point ± sigma` notation.
///
/// # Example
/// ```rust
/// use confidence_rs::{pm, Estimate};
///
/// assert_eq!(pm(42.0, 0.5), Estimate::with_normal_error(42.0, 0.5));
/// ```
pub fn pm<T>(point: T, sigma: T) -> Estimate<NormalErr<T>, T> {
    Estimate::with_normal_error(point, sigma)
}

impl<T> Estimate<TErr<T>, T> {
    /// Estimate with a Student-t distributed error.
    pub fn with_t_error(point: T, sigma: T, ndf: f64) -> Self {
        Self {
            point,
            error: TErr::Student { sigma, ndf },
        }
    }

    /// Estimate whose error model is not yet determined.
    pub fn with_unknown_error(point: T) -> Self {
        Self {
            point,
            error: TErr::Unknown,
        }
    }
}

impl<T> Estimate<ConfInt<T>, T> {
    /// Estimate with an asymmetric error given as `(lower, upper)` deltas
    /// from the point. The deltas are used as-is.
    pub fn from_errors(point: T, deltas: (T, T), confidence_level: CL<f64>) -> Self {
        let (lower_delta, upper_delta) = deltas;
        Self {
            point,
            error: ConfInt::new(lower_delta, upper_delta, confidence_level),
        }
    }

    /// Estimate with an asymmetric error given as the `(lower, upper)`
    /// interval bounds themselves.
    ///
    /// The deltas are derived as `point - lower` and `upper - point`; the
    /// constructor does not verify that the bounds actually bracket the
    /// point.
    ///
    /// # Example
    /// ```rust
    /// use confidence_rs::{Estimate, CL};
    ///
    /// let e = Estimate::from_interval(10.0, (8.0, 13.0), CL::CL95);
    /// assert_eq!(e.confidence_interval(), (8.0, 13.0));
    /// ```
    pub fn from_interval(point: T, interval: (T, T), confidence_level: CL<f64>) -> Self
    where
        T: Copy + Sub<Output = T>,
    {
        let (lower, upper) = interval;
        Self {
            point,
            error: ConfInt::new(point - lower, upper - point, confidence_level),
        }
    }

    /// The interval bounds `(point - lower_delta, point + upper_delta)`.
    #[must_use]
    pub fn confidence_interval(&self) -> (T, T)
    where
        T: Copy + Add<Output = T> + Sub<Output = T>,
    {
        (
            self.point - self.error.lower_delta,
            self.point + self.error.upper_delta,
        )
    }

    /// The `(lower, upper)` deltas exactly as stored.
    #[must_use]
    pub fn asym_errors(&self) -> (T, T)
    where
        T: Copy,
    {
        (self.error.lower_delta, self.error.upper_delta)
    }

    /// The confidence level the interval is stated at.
    #[must_use]
    pub fn confidence_level(&self) -> CL<f64> {
        self.error.confidence_level
    }
}

/// How an error representation transforms when the point estimate is
/// multiplied by a constant.
///
/// [`TErr`] deliberately does not implement this trait: scaling a
/// t-distributed error is not well-defined in general, so estimates with
/// t errors cannot be scaled.
pub trait Scale<T> {
    /// The representation after multiplying the point estimate by `factor`.
    #[must_use]
    fn scale(&self, factor: T) -> Self;
}

impl<T> Scale<T> for NormalErr<T>
where
    T: Copy + Signed,
{
    /// `|factor| · sigma`: the sign is irrelevant for a symmetric error.
    fn scale(&self, factor: T) -> Self {
        Self {
            sigma: factor.abs() * self.sigma,
        }
    }
}

impl<T> Scale<T> for ConfInt<T>
where
    T: Copy + Signed,
{
    /// Scales both deltas by `|factor|`; a negative factor additionally
    /// swaps the deltas, since negation flips which side is "lower".
    fn scale(&self, factor: T) -> Self {
        let magnitude = factor.abs();
        if factor.is_negative() {
            Self {
                lower_delta: magnitude * self.upper_delta,
                upper_delta: magnitude * self.lower_delta,
                confidence_level: self.confidence_level,
            }
        } else {
            Self {
                lower_delta: magnitude * self.lower_delta,
                upper_delta: magnitude * self.upper_delta,
                confidence_level: self.confidence_level,
            }
        }
    }
}

impl<E, T> Scale<T> for Estimate<E, T>
where
    E: Scale<T>,
    T: Copy + Mul<Output = T>,
{
    /// Scales the point directly and the error through its own impl.
    fn scale(&self, factor: T) -> Self {
        Self {
            point: factor * self.point,
            error: self.error.scale(factor),
        }
    }
}
