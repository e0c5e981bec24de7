//! Subset consensus and the top-level solve operation.
//!
//! Every k-subset of the input shares votes for the value its Lagrange
//! interpolation takes at x = 0. Honest shares all lie on the same
//! degree-(k-1) polynomial, so every all-honest subset casts the same vote;
//! subsets polluted by a corrupted share scatter. The value with the most
//! votes wins, and shares appearing in no winning subset are reported as
//! corrupt.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use num_bigint::BigInt;
use rayon::prelude::*;
use ssrec_math::{lagrange_rational_at_zero, Rational};

use crate::subsets::combinations;
use crate::{Error, Result, Share};

/// Outcome of a reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    /// The plurality secret: the interpolated value the largest number of
    /// k-subsets agree on.
    pub secret: BigInt,
    /// Ids of shares that appear in no winning subset, in input order.
    ///
    /// Empty when every share is consistent with the consensus. Always empty
    /// when `n == k`: a single subset gives no redundancy to compare
    /// against, so corruption is undetectable there by construction.
    pub corrupt_ids: Vec<String>,
}

/// Reconstructs the secret from `shares` and identifies the shares
/// inconsistent with the consensus.
///
/// Interpolates every `threshold`-subset of the shares at x = 0 and tallies
/// the exact rational results; the value produced by the most subsets wins.
/// Tallying exact fractions rather than truncated quotients keeps a subset
/// whose interpolation lands strictly between integers from accidentally
/// voting with the honest majority. A tie between equally backed candidates
/// goes to the numerically smallest value, so the outcome is deterministic
/// and independent of enumeration or hashing order.
///
/// The result is meaningful only if the honest shares back more subsets than
/// any coincidental agreement; an inconsistent subset whose interpolation
/// lands exactly on the honest value is indistinguishable from a genuine
/// one and still votes for it.
///
/// Fails if fewer than `threshold` shares are supplied, or if two shares
/// declare the same evaluation point.
pub fn solve(shares: &[Share], threshold: usize) -> Result<Reconstruction> {
    if shares.len() < threshold {
        return Err(Error::InsufficientShares(shares.len(), threshold));
    }
    if let Some((a, b)) = shares
        .iter()
        .tuple_combinations::<(_, _)>()
        .find(|(a, b)| a.x == b.x)
    {
        return Err(Error::DuplicateEvaluationPoint(a.id.clone(), b.id.clone()));
    }

    let subsets: Vec<Vec<usize>> = combinations(shares.len(), threshold).collect();

    // Per-subset interpolations are independent pure computations, and
    // rayon's collect preserves enumeration order.
    let candidates = subsets
        .par_iter()
        .map(|subset| {
            let points: Vec<(BigInt, BigInt)> = subset
                .iter()
                .map(|&i| (shares[i].x.clone(), shares[i].y.clone()))
                .collect();
            lagrange_rational_at_zero(&points)
        })
        .collect::<ssrec_math::Result<Vec<Rational>>>()?;

    // Pure fold into the tally: candidate value -> subset positions.
    let mut tally: HashMap<Rational, Vec<usize>> = HashMap::new();
    for (position, candidate) in candidates.into_iter().enumerate() {
        tally.entry(candidate).or_default().push(position);
    }

    // Largest tally wins; equal tallies go to the smallest value. The order
    // is total over the tally entries, so the maximum is unique and the
    // HashMap iteration order cannot leak into the result.
    let (winner, backing) = tally
        .into_iter()
        .max_by(|(va, sa), (vb, sb)| sa.len().cmp(&sb.len()).then_with(|| vb.cmp(va)))
        .expect("n >= k, so at least one subset was tallied");

    let mut validated: HashSet<usize> = HashSet::new();
    for position in backing {
        validated.extend(subsets[position].iter().copied());
    }

    let corrupt_ids = shares
        .iter()
        .enumerate()
        .filter(|(i, _)| !validated.contains(i))
        .map(|(_, share)| share.id.clone())
        .collect();

    Ok(Reconstruction {
        secret: winner.trunc(),
        corrupt_ids,
    })
}
