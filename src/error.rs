//! Error kinds surfaced by the commitment engine.
//!
//! Every public entry point returns [`Result<T, CoreError>`](CoreError).
//! No entry point panics on malformed caller input; state transitions only
//! occur on success, so a session left mid-accumulation after an error can
//! simply be retried with corrected input.

/// Errors produced by the aggregator, verifier, and tally operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The curve index was not one of the five supported NIST curves (0..=4).
    #[error("unknown curve index {0} (expected 0..=4)")]
    UnknownCurve(u8),

    /// A token was missing, non-numeric where a number was expected, or the
    /// delimiter layout of a wire value didn't match its expected shape.
    #[error("malformed input while parsing {0}")]
    ParseError(String),

    /// A reconstructed (x, parity) pair does not correspond to a point on
    /// the selected curve.
    #[error("point is not on the curve")]
    NotOnCurve,

    /// An operation was called in the wrong session state, e.g. `finalize`
    /// before `init`, or `add` before `init`.
    #[error("invalid session state: {0}")]
    StateError(&'static str),

    /// The tally's declared candidate capacity (`N`) or candidate count
    /// (`m`) was not a positive integer.
    #[error("invalid tally parameters: N and m must both be >= 1")]
    InvalidTallyParameters,

    /// The decommitment scalar encoded more digits than the declared
    /// capacity `(N + 1)^m` can represent.
    #[error("tally value exceeds declared capacity for N and m")]
    OverflowTally,
}
