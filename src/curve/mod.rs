//! Curve parameters and arithmetic.
//!
//! [`table`] holds the fixed five-entry NIST curve table; [`point`]
//! implements generic short-Weierstrass arithmetic over an
//! arbitrary-precision field. Everything outside this module works with
//! [`Point`] and [`Curve`] values and never touches a field element
//! directly.

mod point;
mod table;

pub use point::{Curve, Point};
pub use table::{CurveId, CurveParams};

use num_bigint::BigUint;

use crate::error::CoreError;

/// Build the [`Curve`] (field + Weierstrass `b`) for a validated curve
/// index, parsing its hex parameters.
pub fn build_curve(id: CurveId) -> Result<Curve, CoreError> {
    let params = id.params();
    let p = parse_hex(params.p, "curve modulus p")?;
    let b = parse_hex(params.b, "curve coefficient b")?;
    Ok(Curve::new(p, b))
}

/// The group order `q` for a validated curve index.
pub fn group_order(id: CurveId) -> Result<BigUint, CoreError> {
    parse_hex(id.params().q, "group order q")
}

/// The base point `G` for a validated curve index.
pub fn base_point(id: CurveId) -> Result<Point, CoreError> {
    let params = id.params();
    let gx = parse_hex(params.gx, "generator x")?;
    let gy = parse_hex(params.gy, "generator y")?;
    Ok(Point::Affine(gx, gy))
}

fn parse_hex(text: &str, context: &str) -> Result<BigUint, CoreError> {
    BigUint::parse_bytes(text.as_bytes(), 16)
        .ok_or_else(|| CoreError::ParseError(format!("{context}: not valid hex")))
}
