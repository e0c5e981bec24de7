//! Shamir share reconstruction with corrupted-share detection.
//!
//! Given `n` shares of a (k, n) Shamir secret sharing over the integers, of
//! which only `k` are guaranteed authentic, this crate recovers the secret
//! that a plurality of k-subsets agree on and reports the shares that are
//! inconsistent with that consensus.
//!
//! Every k-subset of the input is interpolated at x = 0 with exact rational
//! arithmetic (see [`ssrec_math`]); the candidate secret backed by the most
//! subsets wins, and any share that appears in no winning subset is flagged
//! as corrupt. This is a forensic tool for small n: the subset enumeration
//! is exhaustive by design.
//!
//! # Example
//!
//! ```
//! use num_bigint::BigInt;
//! use ssrec::{solve, Share};
//!
//! // y = 3x, except share "4" was tampered with (12 -> 11).
//! let shares = vec![
//!     Share::new("1", BigInt::from(1), BigInt::from(3)),
//!     Share::new("2", BigInt::from(2), BigInt::from(6)),
//!     Share::new("3", BigInt::from(3), BigInt::from(9)),
//!     Share::new("4", BigInt::from(4), BigInt::from(11)),
//! ];
//! let r = solve(&shares, 2).unwrap();
//! assert_eq!(r.secret, BigInt::from(0));
//! assert_eq!(r.corrupt_ids, vec!["4".to_string()]);
//! ```

/// Subset consensus and the top-level solve operation.
pub mod consensus;
/// Parsing of the JSON share document.
pub mod parse;
/// The share record.
pub mod share;
/// Lazy enumeration of k-element index combinations.
pub mod subsets;

pub use consensus::{solve, Reconstruction};
pub use parse::{parse_share_document, ShareDocument};
pub use share::Share;
pub use subsets::{combinations, Combinations};

use thiserror::Error;

/// Errors of the reconstruction layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Fewer shares were provided than the reconstruction threshold.
    #[error("too few shares provided: {0} is below threshold {1}")]
    InsufficientShares(usize, usize),
    /// Two shares declare the same evaluation point.
    #[error("shares {0} and {1} declare the same evaluation point")]
    DuplicateEvaluationPoint(String, String),
    /// The share document is structurally invalid.
    #[error("invalid share document: {0}")]
    Document(String),
    /// A share declares a base outside 2..=36.
    #[error("share {1} declares unsupported base {0}")]
    UnsupportedBase(u64, String),
    /// A share value contains a digit outside its declared base.
    #[error("share {0} contains a digit outside base {1}")]
    InvalidDigit(String, u64),
    /// A share id is not a decimal integer.
    #[error("share id {0:?} is not a decimal integer")]
    InvalidShareId(String),
    /// The document is not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// An error bubbled up from the exact-arithmetic layer.
    #[error(transparent)]
    Math(#[from] ssrec_math::Error),
}

/// The Result type for reconstruction operations.
pub type Result<T> = std::result::Result<T, Error>;
