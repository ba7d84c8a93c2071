//! Parsing and formatting of the wire shapes shared with the reference
//! deployment: the public-key blob, commitment contributions/bundles, and
//! decommitment contributions/bundles.
//!
//! Curve indices and y-parity bits are plain decimal integers on the wire
//! (the reference implementation reads them with `atoi`, independent of
//! whatever numeric radix is in effect for scalars); x-coordinates and
//! decommitment scalars are radix-64 ([`super::radix`]).

use num_bigint::BigUint;

use crate::curve::{CurveId, Point};
use crate::error::CoreError;
use crate::wire::radix;
use crate::wire::tokenizer::Tokenizer;

const KEY_DELIMS: &[u8] = b";-";
const DECOMMIT_DELIMS: &[u8] = b",";

fn parse_decimal(token: &[u8], context: &str) -> Result<u8, CoreError> {
    let text = std::str::from_utf8(token)
        .map_err(|_err| CoreError::ParseError(format!("{context}: not ASCII")))?;
    text.parse::<u8>()
        .map_err(|_err| CoreError::ParseError(format!("{context}: not a decimal integer")))
}

fn parity(token: &[u8], context: &str) -> Result<u8, CoreError> {
    match parse_decimal(token, context)? {
        0 => Ok(0),
        _ => Ok(1),
    }
}

fn nth(tokenizer: &Tokenizer<'_>, n: usize, context: &str) -> Result<Vec<u8>, CoreError> {
    tokenizer
        .nth_token(n)
        .map(<[u8]>::to_vec)
        .ok_or_else(|| CoreError::ParseError(format!("{context}: missing token {n}")))
}

/// The curve index and public-key point parsed from a key blob.
#[derive(Debug, Clone)]
pub struct KeyBlob {
    /// Selected curve.
    pub curve_id: CurveId,
    /// Public key point `h`.
    pub public_key: Point,
}

/// Parse a key blob: `<curve_idx>;<x>-<parity>[;<secret, ignored>]`.
pub fn parse_key(key: &[u8]) -> Result<KeyBlob, CoreError> {
    let tokenizer = Tokenizer::new(key, KEY_DELIMS);
    let curve_idx = parse_decimal(&nth(&tokenizer, 1, "key curve index")?, "key curve index")?;
    let curve_id = CurveId::new(curve_idx)?;

    let x_token = nth(&tokenizer, 2, "key public-key x")?;
    let x = radix::decode(&x_token)?;
    let parity_token = nth(&tokenizer, 3, "key public-key parity")?;
    let parity_bit = parity(&parity_token, "key public-key parity")?;

    let curve = crate::curve::build_curve(curve_id)?;
    let public_key = curve.point_from_x_parity(&x, parity_bit)?;

    Ok(KeyBlob {
        curve_id,
        public_key,
    })
}

/// Parse just the curve index out of a key blob, without requiring a
/// public-key point (used by `initializeDecommitmentBundle`, which only
/// needs the group order).
pub fn parse_curve_id(key: &[u8]) -> Result<CurveId, CoreError> {
    let tokenizer = Tokenizer::new(key, KEY_DELIMS);
    let curve_idx = parse_decimal(&nth(&tokenizer, 1, "key curve index")?, "key curve index")?;
    CurveId::new(curve_idx)
}

/// A single commitment contribution: two points `(c1, c2)`.
#[derive(Debug, Clone)]
pub struct CommitmentContribution {
    /// First ciphertext component.
    pub c1: Point,
    /// Second ciphertext component.
    pub c2: Point,
}

/// Parse a commitment contribution or bundle: both share the shape
/// `<x1>-<parity1>;<x2>-<parity2>`.
pub fn parse_commitment_points(
    bytes: &[u8],
    curve: &crate::curve::Curve,
) -> Result<CommitmentContribution, CoreError> {
    let tokenizer = Tokenizer::new(bytes, KEY_DELIMS);
    let x1 = radix::decode(&nth(&tokenizer, 1, "commitment c1.x")?)?;
    let parity1 = parity(&nth(&tokenizer, 2, "commitment c1.parity")?, "commitment c1.parity")?;
    let x2 = radix::decode(&nth(&tokenizer, 3, "commitment c2.x")?)?;
    let parity2 = parity(&nth(&tokenizer, 4, "commitment c2.parity")?, "commitment c2.parity")?;

    let c1 = curve.point_from_x_parity(&x1, parity1)?;
    let c2 = curve.point_from_x_parity(&x2, parity2)?;
    Ok(CommitmentContribution { c1, c2 })
}

/// Format a finalized commitment bundle: `<x(C1)>-<parity(C1)>;<x(C2)>-<parity(C2)>`.
///
/// The identity has no affine x-coordinate; by convention it is written as
/// x = 0 with parity 0, which round-trips to the identity only through
/// this engine's own parser (the identity is never a valid curve point to
/// reconstruct from (x, parity), so callers must special-case an all-zero
/// bundle rather than feed it back through [`parse_commitment_points`]).
#[must_use]
pub fn format_commitment_bundle(c1: &Point, c2: &Point) -> String {
    format!(
        "{}-{};{}-{}",
        point_x_radix64(c1),
        point_parity_digit(c1),
        point_x_radix64(c2),
        point_parity_digit(c2)
    )
}

fn point_x_radix64(point: &Point) -> String {
    match point.x() {
        Some(x) => radix::encode(x),
        None => "0".to_owned(),
    }
}

fn point_parity_digit(point: &Point) -> u8 {
    point.y_parity().unwrap_or(0)
}

/// A single decommitment contribution: two scalars `(d1, d2)`.
#[derive(Debug, Clone)]
pub struct DecommitmentContribution {
    /// Opened message scalar.
    pub d1: BigUint,
    /// Opened randomness scalar.
    pub d2: BigUint,
}

/// Parse a decommitment contribution or bundle: `<d1>,<d2>`.
pub fn parse_decommitment(bytes: &[u8]) -> Result<DecommitmentContribution, CoreError> {
    let tokenizer = Tokenizer::new(bytes, DECOMMIT_DELIMS);
    let d1 = radix::decode(&nth(&tokenizer, 1, "decommitment d1")?)?;
    let d2 = radix::decode(&nth(&tokenizer, 2, "decommitment d2")?)?;
    Ok(DecommitmentContribution { d1, d2 })
}

/// Format a finalized decommitment bundle: `<d1>,<d2>`.
#[must_use]
pub fn format_decommitment_bundle(d1: &BigUint, d2: &BigUint) -> String {
    format!("{},{}", radix::encode(d1), radix::encode(d2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_curve_index_from_key() {
        let id = parse_curve_id(b"2;A-0").expect("valid key shape");
        assert_eq!(id.index(), 2);
    }

    #[test]
    fn rejects_unknown_curve_index() {
        assert!(matches!(
            parse_curve_id(b"9;A-0"),
            Err(CoreError::UnknownCurve(9))
        ));
    }

    #[test]
    fn decommitment_bundle_round_trips() {
        let d1 = BigUint::from(101u32);
        let d2 = BigUint::from(7u32);
        let text = format_decommitment_bundle(&d1, &d2);
        let parsed = parse_decommitment(text.as_bytes()).expect("well-formed");
        assert_eq!(parsed.d1, d1);
        assert_eq!(parsed.d2, d2);
    }

    #[test]
    fn malformed_decommitment_is_a_parse_error() {
        assert!(parse_decommitment(b"garbage").is_err());
    }
}
