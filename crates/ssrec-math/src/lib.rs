//! Mathematical utilities for the ssrec library.
//!
//! Everything needed to interpolate Shamir shares without losing a single
//! bit: arbitrary-precision reduced fractions, and Lagrange evaluation at
//! x = 0 built on top of them. All operations are pure; there is no floating
//! point and no global state anywhere in this crate.

/// Lagrange interpolation at x = 0.
pub mod interpolate;
/// Arbitrary-precision reduced fractions.
pub mod rational;

pub use interpolate::{lagrange_at_zero, lagrange_rational_at_zero};
pub use rational::Rational;

use num_bigint::BigInt;
use thiserror::Error;

/// Errors of the exact-arithmetic layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A rational was constructed with a zero denominator.
    #[error("denominator is zero")]
    ZeroDenominator,
    /// Two interpolation points share an x-coordinate.
    #[error("duplicate evaluation point x = {0}")]
    DuplicateEvaluationPoint(BigInt),
}

/// The Result type for exact-arithmetic operations.
pub type Result<T> = std::result::Result<T, Error>;
