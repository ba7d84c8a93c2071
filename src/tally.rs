//! Positional base-`(N+1)` tally decoding.
//!
//! A finalized decommitment scalar `d1` encodes `m` per-candidate vote
//! counts as base-`(N+1)` digits (`N` = number of voters, so each digit
//! ranges `0..=N`), least-significant digit first. Decoding repeatedly
//! divides by `N + 1` and collects remainders.
//!
//! Unlike the reference implementation, a residual nonzero value after `m`
//! digits have been extracted is reported as [`CoreError::OverflowTally`]
//! rather than silently discarded — this is a deliberate behavior change,
//! since truncating an overflowed tally would silently corrupt an
//! election result.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::CoreError;

/// Decode `value` into `m` base-`(N + 1)` digits, least-significant first
/// in the encoding but returned most-significant (candidate 0) first.
///
/// # Errors
///
/// Returns [`CoreError::InvalidTallyParameters`] if `candidate_count < 1`
/// or `voter_count < 1`.
/// Returns [`CoreError::OverflowTally`] if `value` does not fit in
/// `candidate_count` digits of base `voter_count + 1`.
pub fn decode_tally(
    value: &BigUint,
    voter_count: u32,
    candidate_count: u32,
) -> Result<Vec<BigUint>, CoreError> {
    if candidate_count < 1 || voter_count < 1 {
        return Err(CoreError::InvalidTallyParameters);
    }
    let base = BigUint::from(voter_count) + BigUint::one();

    let mut remainder = value.clone();
    let mut digits_lsb_first = Vec::with_capacity(candidate_count as usize);
    for _ in 0..candidate_count {
        let (quotient, digit) = num_integer::Integer::div_rem(&remainder, &base);
        digits_lsb_first.push(digit);
        remainder = quotient;
    }

    if !remainder.is_zero() {
        tracing::warn!(voter_count, candidate_count, "tally value overflowed declared capacity");
        return Err(CoreError::OverflowTally);
    }

    digits_lsb_first.reverse();
    Ok(digits_lsb_first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_of(voter_count: u32) -> BigUint {
        BigUint::from(voter_count) + BigUint::from(1u8)
    }

    fn encode(digits_msb_first: &[u32], voter_count: u32) -> BigUint {
        let base = base_of(voter_count);
        let mut value = BigUint::zero();
        for &digit in digits_msb_first {
            value = value * &base + BigUint::from(digit);
        }
        value
    }

    #[test]
    fn decodes_digits_in_declared_order() {
        let value = encode(&[3, 1, 4], 10);
        let digits = decode_tally(&value, 10, 3).expect("fits exactly");
        assert_eq!(
            digits,
            vec![BigUint::from(3u8), BigUint::from(1u8), BigUint::from(4u8)]
        );
    }

    #[test]
    fn zero_value_decodes_to_all_zero_digits() {
        let digits = decode_tally(&BigUint::zero(), 5, 4).expect("zero always fits");
        assert_eq!(digits, vec![BigUint::zero(); 4]);
    }

    #[test]
    fn candidate_count_zero_is_invalid() {
        assert!(matches!(
            decode_tally(&BigUint::zero(), 10, 0),
            Err(CoreError::InvalidTallyParameters)
        ));
    }

    #[test]
    fn voter_count_zero_is_invalid() {
        assert!(matches!(
            decode_tally(&BigUint::zero(), 0, 3),
            Err(CoreError::InvalidTallyParameters)
        ));
    }

    #[test]
    fn one_past_declared_capacity_overflows() {
        // N=3, m=4: capacity is (N+1)^m = 256; one more than that overflows.
        let base = base_of(3);
        let capacity = (&base * &base) * (&base * &base);
        assert!(matches!(
            decode_tally(&capacity, 3, 4),
            Err(CoreError::OverflowTally)
        ));
    }

    #[test]
    fn a_value_that_does_not_fit_overflows_rather_than_truncates() {
        let base = base_of(10);
        let just_fits = encode(&[10, 10], 10);
        let one_too_many = &just_fits + &base * &base;
        assert!(decode_tally(&just_fits, 10, 2).is_ok());
        assert!(matches!(
            decode_tally(&one_too_many, 10, 2),
            Err(CoreError::OverflowTally)
        ));
    }

    #[test]
    fn max_legal_digit_value_round_trips() {
        let value = encode(&[7, 7], 7);
        let digits = decode_tally(&value, 7, 2).expect("digit == voter_count is legal");
        assert_eq!(digits, vec![BigUint::from(7u8), BigUint::from(7u8)]);
    }
}
