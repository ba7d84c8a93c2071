//! The aggregator state machine: running sums of commitment points and
//! decommitment scalars.
//!
//! Each session kind moves `Idle -> Init -> Acc* -> Final -> Idle`. Unlike
//! the reference implementation, the running sums start at the additive
//! identity (point infinity / scalar zero) and every contribution is an
//! ordinary add — the original's `isFirstDecommitment` flag and
//! "both sums are still zero" special case are dropped, since adding onto
//! the identity is already the correct behavior.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::curve::{build_curve, group_order, Curve, CurveId, Point};
use crate::error::CoreError;
use crate::wire::codec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Idle,
    Accumulating,
}

/// A commitment-aggregation session: running sums `(C1, C2)` of commitment
/// point-pairs on a single curve.
#[derive(Debug)]
pub struct CommitmentSession {
    state: SessionState,
    curve: Option<Curve>,
    c1: Point,
    c2: Point,
}

impl Default for CommitmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitmentSession {
    /// A fresh, idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SessionState::Idle,
            curve: None,
            c1: Point::Identity,
            c2: Point::Identity,
        }
    }

    /// `initializeCommitmentBundle`: select the curve and zero the running
    /// sums.
    pub fn initialize(&mut self, key: &[u8]) -> Result<(), CoreError> {
        let blob = codec::parse_key(key)?;
        let curve = build_curve(blob.curve_id)?;
        self.curve = Some(curve);
        self.c1 = Point::Identity;
        self.c2 = Point::Identity;
        self.state = SessionState::Accumulating;
        tracing::debug!(curve = blob.curve_id.index(), "commitment session initialized");
        Ok(())
    }

    /// `addToCommitmentBundle`: parse a contribution and add it into the
    /// running sums.
    pub fn add(&mut self, contribution: &[u8]) -> Result<(), CoreError> {
        if self.state != SessionState::Accumulating {
            return Err(CoreError::StateError(
                "addToCommitmentBundle called before initializeCommitmentBundle",
            ));
        }
        let curve = self
            .curve
            .as_ref()
            .ok_or(CoreError::StateError("commitment session has no curve"))?;
        let parsed = codec::parse_commitment_points(contribution, curve)?;
        self.c1 = curve.add(&self.c1, &parsed.c1);
        self.c2 = curve.add(&self.c2, &parsed.c2);
        Ok(())
    }

    /// `finalizeCommitmentBundle`: emit the serialized bundle and return to
    /// `Idle`.
    pub fn finalize(&mut self) -> Result<String, CoreError> {
        if self.state != SessionState::Accumulating {
            return Err(CoreError::StateError(
                "finalizeCommitmentBundle called before initializeCommitmentBundle",
            ));
        }
        let bundle = codec::format_commitment_bundle(&self.c1, &self.c2);
        self.state = SessionState::Idle;
        self.curve = None;
        self.c1 = Point::Identity;
        self.c2 = Point::Identity;
        tracing::debug!("commitment session finalized");
        Ok(bundle)
    }
}

/// A decommitment-aggregation session: running sums `(d1, d2)` of
/// decommitment scalars for a single curve's group order.
#[derive(Debug)]
pub struct DecommitmentSession {
    state: SessionState,
    curve_id: Option<CurveId>,
    q: Option<BigUint>,
    d1: BigUint,
    d2: BigUint,
}

impl Default for DecommitmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DecommitmentSession {
    /// A fresh, idle session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            curve_id: None,
            q: None,
            d1: BigUint::zero(),
            d2: BigUint::zero(),
        }
    }

    /// `initializeDecommitmentBundle`: select the curve's group order and
    /// zero the running sums.
    pub fn initialize(&mut self, key: &[u8]) -> Result<(), CoreError> {
        let curve_id = codec::parse_curve_id(key)?;
        let q = group_order(curve_id)?;
        self.curve_id = Some(curve_id);
        self.q = Some(q);
        self.d1 = BigUint::zero();
        self.d2 = BigUint::zero();
        self.state = SessionState::Accumulating;
        tracing::debug!(curve = curve_id.index(), "decommitment session initialized");
        Ok(())
    }

    /// `addToDecommitmentBundle`: parse a contribution and add it into the
    /// running sums. No modular reduction happens here — only at
    /// `finalize`.
    pub fn add(&mut self, contribution: &[u8]) -> Result<(), CoreError> {
        if self.state != SessionState::Accumulating {
            return Err(CoreError::StateError(
                "addToDecommitmentBundle called before initializeDecommitmentBundle",
            ));
        }
        let parsed = codec::parse_decommitment(contribution)?;
        self.d1 += &parsed.d1;
        self.d2 += &parsed.d2;
        Ok(())
    }

    /// `finalizeDecommitmentBundle`: reduce both sums mod `q`, emit the
    /// serialized bundle, and return to `Idle`.
    pub fn finalize(&mut self) -> Result<String, CoreError> {
        if self.state != SessionState::Accumulating {
            return Err(CoreError::StateError(
                "finalizeDecommitmentBundle called before initializeDecommitmentBundle",
            ));
        }
        let q = self
            .q
            .as_ref()
            .ok_or(CoreError::StateError("decommitment session has no group order"))?;
        let d1 = &self.d1 % q;
        let d2 = &self.d2 % q;
        let bundle = codec::format_decommitment_bundle(&d1, &d2);
        self.state = SessionState::Idle;
        self.curve_id = None;
        self.q = None;
        self.d1 = BigUint::zero();
        self.d2 = BigUint::zero();
        tracing::debug!("decommitment session finalized");
        Ok(bundle)
    }
}
