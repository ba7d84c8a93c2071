//! The fixed table of five NIST short-Weierstrass curves.
//!
//! Each entry is a FIPS 186-4 curve: `y² = x³ + ax + b mod p` with `a = -3`
//! for all five. The hex values are reproduced exactly from the reference
//! implementation this engine is interoperable with — they are part of the
//! wire contract, not an implementation detail.

use crate::error::CoreError;

/// Index into the fixed curve table.
///
/// `0..=4` select {P-192, P-224, P-256, P-384, P-521} respectively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveId(u8);

impl CurveId {
    /// Validate a raw curve index against the table.
    pub fn new(idx: u8) -> Result<Self, CoreError> {
        if usize::from(idx) < CURVES.len() {
            Ok(Self(idx))
        } else {
            Err(CoreError::UnknownCurve(idx))
        }
    }

    /// The raw table index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Look up this curve's hex-encoded parameters.
    #[must_use]
    pub fn params(self) -> &'static CurveParams {
        #[expect(
            clippy::indexing_slicing,
            reason = "CurveId::new validated idx < CURVES.len()"
        )]
        &CURVES[usize::from(self.0)]
    }
}

/// Hex-encoded parameters for one NIST curve. `a` is always `-3` and is not
/// stored here (callers negate `p` appropriately when building the field).
#[derive(Debug, Clone, Copy)]
pub struct CurveParams {
    /// Human-readable name, for diagnostics only — never on the wire.
    pub name: &'static str,
    /// Prime field modulus, hex.
    pub p: &'static str,
    /// Prime order of the base point, hex.
    pub q: &'static str,
    /// Weierstrass `b` coefficient, hex.
    pub b: &'static str,
    /// Base point x-coordinate, hex.
    pub gx: &'static str,
    /// Base point y-coordinate, hex.
    pub gy: &'static str,
}

/// The five curves, indexed 0..=4 as {P-192, P-224, P-256, P-384, P-521}.
static CURVES: [CurveParams; 5] = [
    CurveParams {
        name: "P-192",
        p: "fffffffffffffffffffffffffffffffeffffffffffffffff",
        q: "ffffffffffffffffffffffff99def836146bc9b1b4d22831",
        b: "64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1",
        gx: "188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012",
        gy: "07192b95ffc8da78631011ed6b24cdd573f977a11e794811",
    },
    CurveParams {
        name: "P-224",
        p: "ffffffffffffffffffffffffffffffff000000000000000000000001",
        q: "ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d",
        b: "b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4",
        gx: "b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21",
        gy: "bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34",
    },
    CurveParams {
        name: "P-256",
        p: "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        q: "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
        b: "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
        gx: "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
        gy: "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
    },
    CurveParams {
        name: "P-384",
        p: "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff",
        q: "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973",
        b: "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef",
        gx: "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55296c3a545e3872760ab7",
        gy: "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e819d7a431d7c90ea0e5f",
    },
    CurveParams {
        name: "P-521",
        p: "0001ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        q: "000001fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409",
        b: "00000051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
        gx: "000000c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
        gy: "0000011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_index() {
        assert!(matches!(
            CurveId::new(5),
            Err(CoreError::UnknownCurve(5))
        ));
    }

    #[test]
    fn accepts_every_table_entry() {
        for idx in 0..5u8 {
            let curve = CurveId::new(idx).expect("0..=4 is in range");
            assert_eq!(curve.index(), idx);
        }
    }

    #[test]
    fn p521_is_the_widest_entry() {
        let curve = CurveId::new(4).expect("index 4 is P-521");
        assert_eq!(curve.params().name, "P-521");
        assert!(curve.params().p.len() > CurveId::new(0).expect("index 0 is P-192").params().p.len());
    }
}
