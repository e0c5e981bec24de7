//! The share record.

use num_bigint::BigInt;

/// One share of the secret: a sample `(x, y)` of the hidden polynomial plus
/// the identifier it was issued under.
///
/// Shares are immutable once constructed. The evaluation point `x` must be
/// non-zero and distinct across the shares handed to the solver; the id is
/// only used for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    /// Reporting identifier; distinct per share.
    pub id: String,
    /// Evaluation point.
    pub x: BigInt,
    /// Declared polynomial value at `x`.
    pub y: BigInt,
}

impl Share {
    /// Creates a share.
    pub fn new(id: impl Into<String>, x: BigInt, y: BigInt) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }
}
