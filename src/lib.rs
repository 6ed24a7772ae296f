//! # confidence-rs
//!
//! Value types for representing statistical uncertainty: p-values,
//! confidence levels, point estimates with attached error models, and
//! one-sided limits.
//!
//! ## Core Concept: Validated Value Types
//!
//! Probabilities are witness types: once a [`PValue`] or [`CL`] exists, its
//! value is guaranteed to lie in [0, 1], and decoding a serialized one
//! re-runs the same check rather than clamping.
//!
//! ```rust
//! use confidence_rs::{pm, CL, Estimate, Scale};
//!
//! // A measurement of 144 ± 5 (symmetric normal error)...
//! let length_mm = pm(144.0, 5.0);
//!
//! // ...converted to another unit, error transforming along.
//! let length_half_mm = length_mm.scale(2.0);
//! assert_eq!(length_half_mm, pm(288.0, 10.0));
//!
//! // Asymmetric intervals carry their confidence level with them.
//! let rate = Estimate::from_interval(10.0, (8.0, 13.0), CL::CL95);
//! assert_eq!(rate.asym_errors(), (2.0, 3.0));
//! ```
//!
//! ## Features
//!
//! - **Validated probabilities**: [`PValue`] and [`CL`] enforce the [0, 1]
//!   invariant at construction, deserialization, and parsing
//! - **Reversed `CL` ordering**: confidence levels compare by confidence,
//!   not by their stored significance
//! - **Sigma conversions**: confidence level ↔ number of standard
//!   deviations, one- and two-tailed, via the standard normal distribution
//! - **Composable error models**: [`NormalErr`], [`TErr`], [`ConfInt`] all
//!   parametrize [`Estimate`]; the [`Scale`] capability defines how each
//!   transforms under multiplication by a constant
//! - **One-sided limits**: [`UpperLimit`] and [`LowerLimit`] tag a single
//!   bound with its confidence level
//!
//! This crate is a data-modeling layer only: the statistical tests and
//! fitting procedures that *produce* these values live elsewhere.

pub mod error;
pub mod estimate;
pub mod limits;
pub mod probability;
pub mod sigma;
pub mod statistic;

pub use error::{ConfidenceError, Result};
pub use estimate::{pm, ConfInt, Estimate, NormalErr, Scale, TErr};
pub use limits::{LowerLimit, UpperLimit};
pub use probability::{PValue, CL};
pub use statistic::TestStatistic;
