//! Decommitment verification: checking that an opened `(d1, d2)` pair
//! actually decommits a finalized `(C1, C2)` commitment bundle under a
//! given public key.
//!
//! With `G` the curve's base point and `h` the public key, a valid
//! decommitment satisfies `C1 == d2*G` and `C2 == d1*G + d2*h`. A
//! malformed wire value is a parse error; a well-formed but
//! cryptographically mismatched opening returns `Ok(false)`, not an
//! error — verification failing is an expected outcome, not a fault.

use crate::curve::base_point;
use crate::error::CoreError;
use crate::wire::codec;

/// Verify that `decommitment` opens `commitment` under `key`.
///
/// Returns `Ok(false)` (rather than an error) when every value parses but
/// the algebraic check fails.
pub fn verify_commitment(
    key: &[u8],
    commitment: &[u8],
    decommitment: &[u8],
) -> Result<bool, CoreError> {
    let blob = codec::parse_key(key)?;
    let curve = crate::curve::build_curve(blob.curve_id)?;
    let generator = base_point(blob.curve_id)?;

    let bundle = codec::parse_commitment_points(commitment, &curve)?;
    let opening = codec::parse_decommitment(decommitment)?;

    let expected_c1 = curve.scalar_mul(&generator, &opening.d2);
    let d1_g = curve.scalar_mul(&generator, &opening.d1);
    let d2_h = curve.scalar_mul(&blob.public_key, &opening.d2);
    let expected_c2 = curve.add(&d1_g, &d2_h);

    let matches = expected_c1 == bundle.c1 && expected_c2 == bundle.c2;
    if matches {
        tracing::debug!("commitment verified");
    } else {
        tracing::warn!("commitment verification failed");
    }
    Ok(matches)
}
