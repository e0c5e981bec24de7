//! Lagrange interpolation at x = 0.
//!
//! Evaluating the unique polynomial through k points at x = 0 recovers its
//! constant term, which in a Shamir scheme is the secret. The evaluation is
//! carried out entirely in [`Rational`] so that nothing is ever rounded.

use num_bigint::BigInt;

use crate::{Error, Rational, Result};

/// Evaluates, at x = 0, the unique degree-(k-1) polynomial through the given
/// k points, as an exact reduced fraction.
///
/// When the points are consistent samples of an integer-coefficient
/// polynomial at integer abscissas, the result reduces to an integer (its
/// denominator is 1). When they are not, the fraction is returned as-is;
/// deciding which point sets to trust is the consensus layer's job, not
/// this one's.
///
/// Fails if two points share an x-coordinate. The empty sum is 0/1.
pub fn lagrange_rational_at_zero(points: &[(BigInt, BigInt)]) -> Result<Rational> {
    for (j, (xj, _)) in points.iter().enumerate() {
        if points[..j].iter().any(|(xm, _)| xm == xj) {
            return Err(Error::DuplicateEvaluationPoint(xj.clone()));
        }
    }

    let mut secret = Rational::zero();
    for (j, (xj, yj)) in points.iter().enumerate() {
        let mut term = Rational::from_integer(yj.clone());
        for (m, (xm, _)) in points.iter().enumerate() {
            if m == j {
                continue;
            }
            term = &term * &Rational::new(xm.clone(), xm - xj)?;
        }
        secret = &secret + &term;
    }
    Ok(secret)
}

/// Evaluates, at x = 0, the unique degree-(k-1) polynomial through the given
/// k points, truncated to an integer.
///
/// For an honest k-subset the division is exact; for an inconsistent one the
/// truncating quotient is returned without complaint. Exactness is not
/// verified here.
pub fn lagrange_at_zero(points: &[(BigInt, BigInt)]) -> Result<BigInt> {
    Ok(lagrange_rational_at_zero(points)?.trunc())
}
