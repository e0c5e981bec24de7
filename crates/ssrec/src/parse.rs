//! Parsing of the JSON share document.
//!
//! The document carries a `keys` object holding the share count `n` and the
//! threshold `k`, plus one entry per share keyed by its decimal id:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Each value string is decoded from its declared base (2..=36, digits
//! case-insensitive) into a `BigInt`, and the id doubles as the share's
//! evaluation point x. Shares are returned sorted by ascending id so the
//! input order is deterministic regardless of JSON key ordering.

use num_bigint::BigInt;
use num_traits::Num;
use serde_json::Value;

use crate::{Error, Result, Share};

/// A parsed share document: the reconstruction threshold plus the decoded
/// shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDocument {
    /// Minimum number of genuine shares needed to reconstruct.
    pub threshold: usize,
    /// Decoded shares, ascending by numeric id.
    pub shares: Vec<Share>,
}

/// Parses a JSON share document.
pub fn parse_share_document(input: &str) -> Result<ShareDocument> {
    let root: Value = serde_json::from_str(input)?;
    let root = root
        .as_object()
        .ok_or_else(|| Error::Document("root is not an object".into()))?;

    let keys = root
        .get("keys")
        .and_then(Value::as_object)
        .ok_or_else(|| Error::Document("missing \"keys\" object".into()))?;
    let threshold = keys
        .get("k")
        .and_then(Value::as_u64)
        .ok_or_else(|| Error::Document("\"keys\" is missing integer \"k\"".into()))?
        as usize;

    let mut shares = Vec::new();
    for (id, entry) in root {
        if id == "keys" {
            continue;
        }
        let x = BigInt::from_str_radix(id, 10).map_err(|_| Error::InvalidShareId(id.clone()))?;
        let entry = entry
            .as_object()
            .ok_or_else(|| Error::Document(format!("share {id} is not an object")))?;

        let base = match entry.get("base") {
            Some(Value::String(s)) => s
                .parse::<u64>()
                .map_err(|_| Error::Document(format!("share {id} has a malformed base")))?,
            Some(Value::Number(n)) => n
                .as_u64()
                .ok_or_else(|| Error::Document(format!("share {id} has a malformed base")))?,
            _ => return Err(Error::Document(format!("share {id} is missing \"base\""))),
        };
        if !(2..=36).contains(&base) {
            return Err(Error::UnsupportedBase(base, id.clone()));
        }

        let value = entry
            .get("value")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Document(format!("share {id} is missing \"value\"")))?;
        let y = BigInt::from_str_radix(&value.to_lowercase(), base as u32)
            .map_err(|_| Error::InvalidDigit(id.clone(), base))?;

        shares.push(Share::new(id.clone(), x, y));
    }

    if let Some(n) = keys.get("n").and_then(Value::as_u64) {
        if n as usize != shares.len() {
            return Err(Error::Document(format!(
                "\"n\" is {n} but {} shares are present",
                shares.len()
            )));
        }
    }

    shares.sort_by(|a, b| a.x.cmp(&b.x));
    Ok(ShareDocument { threshold, shares })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve;

    #[test]
    fn decodes_mixed_bases() {
        let doc = parse_share_document(
            r#"{
                "keys": { "n": 4, "k": 3 },
                "1": { "base": "10", "value": "4" },
                "2": { "base": "2", "value": "111" },
                "3": { "base": "10", "value": "12" },
                "6": { "base": "4", "value": "213" }
            }"#,
        )
        .unwrap();

        assert_eq!(doc.threshold, 3);
        assert_eq!(doc.shares.len(), 4);
        assert_eq!(doc.shares[1].id, "2");
        assert_eq!(doc.shares[1].y, BigInt::from(7)); // 111 in base 2
        assert_eq!(doc.shares[3].id, "6");
        assert_eq!(doc.shares[3].x, BigInt::from(6));
        assert_eq!(doc.shares[3].y, BigInt::from(39)); // 213 in base 4
    }

    #[test]
    fn hex_digits_are_case_insensitive() {
        let doc = parse_share_document(
            r#"{
                "keys": { "n": 2, "k": 2 },
                "1": { "base": "16", "value": "FF" },
                "2": { "base": "16", "value": "ff" }
            }"#,
        )
        .unwrap();
        assert_eq!(doc.shares[0].y, BigInt::from(255));
        assert_eq!(doc.shares[1].y, BigInt::from(255));
    }

    #[test]
    fn numeric_base_field_is_accepted() {
        let doc = parse_share_document(
            r#"{ "keys": { "k": 1 }, "1": { "base": 8, "value": "17" } }"#,
        )
        .unwrap();
        assert_eq!(doc.shares[0].y, BigInt::from(15));
    }

    #[test]
    fn shares_are_sorted_by_id() {
        let doc = parse_share_document(
            r#"{
                "keys": { "n": 3, "k": 2 },
                "10": { "base": "10", "value": "1" },
                "2": { "base": "10", "value": "2" },
                "1": { "base": "10", "value": "3" }
            }"#,
        )
        .unwrap();
        let ids: Vec<&str> = doc.shares.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "10"]);
    }

    #[test]
    fn missing_keys_object_is_an_error() {
        let err = parse_share_document(r#"{ "1": { "base": "10", "value": "1" } }"#).unwrap_err();
        assert!(matches!(err, Error::Document(_)));
    }

    #[test]
    fn unsupported_base_is_an_error() {
        let err = parse_share_document(
            r#"{ "keys": { "k": 1 }, "1": { "base": "37", "value": "z" } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnsupportedBase(37, id) if id == "1"));
    }

    #[test]
    fn out_of_base_digit_is_an_error() {
        let err = parse_share_document(
            r#"{ "keys": { "k": 1 }, "1": { "base": "2", "value": "102" } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidDigit(id, 2) if id == "1"));
    }

    #[test]
    fn non_numeric_id_is_an_error() {
        let err = parse_share_document(
            r#"{ "keys": { "k": 1 }, "first": { "base": "10", "value": "1" } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidShareId(id) if id == "first"));
    }

    #[test]
    fn share_count_mismatch_is_an_error() {
        let err = parse_share_document(
            r#"{ "keys": { "n": 3, "k": 2 }, "1": { "base": "10", "value": "1" } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Document(_)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            parse_share_document("not json").unwrap_err(),
            Error::Json(_)
        ));
    }

    #[test]
    fn parsed_document_solves_end_to_end() {
        // y = 3x, share "4" tampered (12 -> 11), values in mixed bases.
        let doc = parse_share_document(
            r#"{
                "keys": { "n": 4, "k": 2 },
                "1": { "base": "10", "value": "3" },
                "2": { "base": "2", "value": "110" },
                "3": { "base": "16", "value": "9" },
                "4": { "base": "10", "value": "11" }
            }"#,
        )
        .unwrap();
        let r = solve(&doc.shares, doc.threshold).unwrap();
        assert_eq!(r.secret, BigInt::from(0));
        assert_eq!(r.corrupt_ids, vec!["4".to_string()]);
    }
}
