//! Radix-64 text encoding for wire scalars and x-coordinates.
//!
//! This is *not* standard Base64: there is no padding, digits are
//! most-significant-first, and the alphabet maps straight to numeric
//! digit values rather than 6-bit byte groups. The alphabet is fixed to
//! `0-9A-Za-z+/`, matching the convention of the MIRACL big-number library
//! the original implementation's wire format was built on — this is an
//! interop contract, not a free choice.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::CoreError;

const ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/";

/// Parse a radix-64 digit string into an unsigned big integer.
pub fn decode(text: &[u8]) -> Result<BigUint, CoreError> {
    if text.is_empty() {
        return Err(CoreError::ParseError("empty radix-64 value".to_owned()));
    }
    let mut value = BigUint::zero();
    let base = BigUint::from(64u8);
    for &byte in text {
        let digit = ALPHABET
            .iter()
            .position(|&candidate| candidate == byte)
            .ok_or_else(|| {
                CoreError::ParseError(format!("byte {byte:#x} is not a radix-64 digit"))
            })?;
        value = value * &base + BigUint::from(digit);
    }
    Ok(value)
}

/// Format an unsigned big integer as a radix-64 digit string,
/// most-significant digit first. Zero encodes as a single `"0"` digit.
#[must_use]
pub fn encode(value: &BigUint) -> String {
    if value.is_zero() {
        return "0".to_owned();
    }
    let digits = value.to_radix_be(64);
    digits
        .into_iter()
        .map(|digit| {
            let index = usize::from(digit);
            #[expect(
                clippy::indexing_slicing,
                reason = "to_radix_be(64) always yields digits < 64, the alphabet length"
            )]
            char::from(ALPHABET[index])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_round_trips() {
        let value = BigUint::zero();
        let text = encode(&value);
        assert_eq!(text, "0");
        assert_eq!(decode(text.as_bytes()).expect("valid"), value);
    }

    #[test]
    fn round_trips_arbitrary_values() {
        for raw in [1u64, 63, 64, 65, 4095, 1_000_000_007, u64::MAX] {
            let value = BigUint::from(raw);
            let text = encode(&value);
            assert_eq!(decode(text.as_bytes()).expect("valid"), value, "raw = {raw}");
        }
    }

    #[test]
    fn rejects_non_alphabet_bytes() {
        assert!(decode(b"12 34").is_err());
        assert!(decode(b"").is_err());
    }

    #[test]
    fn alphabet_digit_63_is_slash() {
        let value = BigUint::from(63u8);
        assert_eq!(encode(&value), "/");
    }

    #[test]
    fn alphabet_digit_62_is_plus() {
        let value = BigUint::from(62u8);
        assert_eq!(encode(&value), "+");
    }
}
