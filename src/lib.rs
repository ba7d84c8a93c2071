//! Homomorphic-commitment aggregation for an Exponential-ElGamal
//! electronic-voting tally over NIST short-Weierstrass curves.
//!
//! A voter's ballot is committed as an ElGamal ciphertext pair `(C1, C2)`
//! over a chosen candidate curve; because the scheme is additively
//! homomorphic, summing ciphertexts across a ballot box sums the encoded
//! vote totals without ever decrypting an individual ballot. This crate
//! provides:
//!
//! - [`curve`]: the five-entry NIST curve table and the short-Weierstrass
//!   arithmetic over it.
//! - [`wire`]: the delimiter-separated text wire format shared with the
//!   reference deployment (tokenizing, the radix-64 numeric codec, and
//!   bundle parsing/formatting).
//! - [`aggregator`]: the [`CommitmentSession`](aggregator::CommitmentSession)
//!   and [`DecommitmentSession`](aggregator::DecommitmentSession) state
//!   machines that sum ballot contributions into a bundle.
//! - [`verifier`]: checking that an opened decommitment matches a
//!   finalized commitment bundle under a public key.
//! - [`tally`]: decoding a finalized decommitment scalar into
//!   per-candidate vote counts.
//!
//! [`CommitmentCore`] wraps the two session types behind the seven
//! operations a caller drives a tally through, matching the reference
//! deployment's entry points one-to-one.

pub mod aggregator;
pub mod curve;
pub mod error;
pub mod tally;
pub mod verifier;
pub mod wire;

use num_bigint::BigUint;

pub use aggregator::{CommitmentSession, DecommitmentSession};
pub use error::CoreError;

/// A caller-owned handle bundling one commitment session and one
/// decommitment session. Not internally locked: concurrent tallies must
/// each own their own `CommitmentCore`.
#[derive(Debug, Default)]
pub struct CommitmentCore {
    commitment: CommitmentSession,
    decommitment: DecommitmentSession,
}

impl CommitmentCore {
    /// A fresh core with both sessions idle.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commitment: CommitmentSession::new(),
            decommitment: DecommitmentSession::new(),
        }
    }

    /// `initializeCommitmentBundle`.
    pub fn init_commitment(&mut self, key: &[u8]) -> Result<(), CoreError> {
        self.commitment.initialize(key)
    }

    /// `addToCommitmentBundle`.
    pub fn add_commitment(&mut self, contribution: &[u8]) -> Result<(), CoreError> {
        self.commitment.add(contribution)
    }

    /// `finalizeCommitmentBundle`.
    pub fn finalize_commitment(&mut self) -> Result<String, CoreError> {
        self.commitment.finalize()
    }

    /// `initializeDecommitmentBundle`.
    pub fn init_decommitment(&mut self, key: &[u8]) -> Result<(), CoreError> {
        self.decommitment.initialize(key)
    }

    /// `addToDecommitmentBundle`.
    pub fn add_decommitment(&mut self, contribution: &[u8]) -> Result<(), CoreError> {
        self.decommitment.add(contribution)
    }

    /// `finalizeDecommitmentBundle`.
    pub fn finalize_decommitment(&mut self) -> Result<String, CoreError> {
        self.decommitment.finalize()
    }

    /// `verifyCommitment`. Does not touch session state: verification is a
    /// pure function of its three wire-format arguments.
    pub fn verify(
        &self,
        key: &[u8],
        commitment: &[u8],
        decommitment: &[u8],
    ) -> Result<bool, CoreError> {
        verifier::verify_commitment(key, commitment, decommitment)
    }

    /// `tallyDecommitment`: decode a finalized decommitment's `d1` scalar
    /// into `candidate_count` per-candidate vote totals, base
    /// `voter_count + 1`.
    pub fn tally(
        &self,
        decommitment: &[u8],
        voter_count: u32,
        candidate_count: u32,
    ) -> Result<Vec<BigUint>, CoreError> {
        let parsed = wire::codec::parse_decommitment(decommitment)?;
        tally::decode_tally(&parsed.d1, voter_count, candidate_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reproduces a full two-ballot-box scenario on P-256: two voters each
    // commit and decommit a single-candidate "yes" vote (digit 1 of 1),
    // the bundles are aggregated, verified, and tallied to 2.
    #[test]
    fn end_to_end_two_voter_tally_on_p256() {
        use crate::curve::{base_point, build_curve, CurveId};
        use crate::wire::{codec, radix};

        let curve_id = CurveId::new(2).expect("valid index");
        let curve = build_curve(curve_id).expect("table entry parses");
        let generator = base_point(curve_id).expect("table entry parses");
        let secret = BigUint::from(777u32);
        let public = curve.scalar_mul(&generator, &secret);
        let key = format!(
            "2;{}-{}",
            radix::encode(public.x().expect("affine")),
            public.y_parity().expect("affine")
        )
        .into_bytes();

        // Each voter's ballot: d1 = 1 (their vote), d2 = a per-ballot blind.
        let ballots = [(BigUint::from(1u8), BigUint::from(11u32)), (BigUint::from(1u8), BigUint::from(23u32))];

        let mut core = CommitmentCore::new();
        core.init_commitment(&key).expect("valid key");
        core.init_decommitment(&key).expect("valid key");

        for (d1, d2) in &ballots {
            let c1 = curve.scalar_mul(&generator, d2);
            let c2 = curve.add(&curve.scalar_mul(&generator, d1), &curve.scalar_mul(&public, d2));
            let commitment = codec::format_commitment_bundle(&c1, &c2);
            let decommitment = codec::format_decommitment_bundle(d1, d2);
            core.add_commitment(commitment.as_bytes()).expect("well-formed contribution");
            core.add_decommitment(decommitment.as_bytes()).expect("well-formed contribution");
        }

        let commitment_bundle = core.finalize_commitment().expect("accumulating session");
        let decommitment_bundle = core.finalize_decommitment().expect("accumulating session");

        assert!(core
            .verify(&key, commitment_bundle.as_bytes(), decommitment_bundle.as_bytes())
            .expect("well-formed bundles"));

        let digits = core
            .tally(decommitment_bundle.as_bytes(), 2, 1)
            .expect("two 1-vote ballots fit in one base-3 digit");
        assert_eq!(digits, vec![BigUint::from(2u8)]);
    }

    #[test]
    fn verify_rejects_a_mismatched_decommitment() {
        use crate::curve::{base_point, build_curve, CurveId};
        use crate::wire::{codec, radix};

        let curve_id = CurveId::new(2).expect("valid index");
        let curve = build_curve(curve_id).expect("table entry parses");
        let generator = base_point(curve_id).expect("table entry parses");
        let secret = BigUint::from(42u32);
        let public = curve.scalar_mul(&generator, &secret);
        let key = format!(
            "2;{}-{}",
            radix::encode(public.x().expect("affine")),
            public.y_parity().expect("affine")
        )
        .into_bytes();

        let mut core = CommitmentCore::new();
        core.init_commitment(&key).expect("valid key");
        let d1 = BigUint::from(5u32);
        let d2 = BigUint::from(2u32);
        let c1 = curve.scalar_mul(&generator, &d2);
        let c2 = curve.add(&curve.scalar_mul(&generator, &d1), &curve.scalar_mul(&public, &d2));
        core.add_commitment(codec::format_commitment_bundle(&c1, &c2).as_bytes())
            .expect("well-formed contribution");
        let bundle = core.finalize_commitment().expect("accumulating session");

        let wrong_decommitment = codec::format_decommitment_bundle(&BigUint::from(6u32), &d2);
        assert!(!core
            .verify(&key, bundle.as_bytes(), wrong_decommitment.as_bytes())
            .expect("well-formed inputs"));
    }
}
