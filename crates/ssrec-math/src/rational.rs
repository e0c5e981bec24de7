//! Arbitrary-precision reduced fractions.
//!
//! Lagrange interpolation over integer sample points produces intermediate
//! values that are exact ratios of very large integers. `Rational` keeps
//! every intermediate in lowest terms so that the final step is a plain
//! integer division.

use std::cmp::Ordering;
use std::ops::{Add, Mul};

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::{Error, Result};

/// An exact ratio of two `BigInt`s, always held in lowest terms.
///
/// Invariants: the denominator is strictly positive and coprime with the
/// numerator, and zero is represented as 0/1. The sign lives in the
/// numerator. Every constructor and operation re-normalizes, so two equal
/// values always have identical representations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    num: BigInt,
    den: BigInt,
}

impl Rational {
    /// Creates the reduced fraction `num / den`.
    ///
    /// Returns an error if `den` is zero.
    pub fn new(num: BigInt, den: BigInt) -> Result<Self> {
        if den.is_zero() {
            return Err(Error::ZeroDenominator);
        }
        Ok(Self::normalized(num, den))
    }

    /// The rational 0/1.
    pub fn zero() -> Self {
        Self {
            num: BigInt::zero(),
            den: BigInt::one(),
        }
    }

    /// Embeds an integer as `n / 1`.
    pub fn from_integer(n: BigInt) -> Self {
        Self {
            num: n,
            den: BigInt::one(),
        }
    }

    /// The numerator of the reduced fraction.
    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    /// The denominator of the reduced fraction; always positive.
    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    /// Whether the reduced denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// The integer quotient `num / den`, truncated towards zero.
    pub fn trunc(&self) -> BigInt {
        &self.num / &self.den
    }

    // `den` must be non-zero.
    fn normalized(mut num: BigInt, mut den: BigInt) -> Self {
        debug_assert!(!den.is_zero());
        if den.is_negative() {
            num = -num;
            den = -den;
        }
        let g = gcd(num.abs(), den.clone());
        if !g.is_one() {
            num /= &g;
            den /= &g;
        }
        Self { num, den }
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        // Operand denominators are non-zero by construction, so their
        // product is non-zero as well.
        Rational::normalized(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::normalized(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplication preserves order.
        (&self.num * &other.den).cmp(&(&other.num * &self.den))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Euclid's algorithm on non-negative inputs; gcd(0, b) = b.
fn gcd(mut a: BigInt, mut b: BigInt) -> BigInt {
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}
