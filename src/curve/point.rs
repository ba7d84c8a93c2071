//! Generic short-Weierstrass curve arithmetic over an arbitrary-precision
//! prime field.
//!
//! No published crate exposes a Weierstrass curve whose modulus is chosen
//! at runtime from a five-entry table spanning 192 to 521 bits, so this
//! module plays the role the wire-format side of this engine treats as an
//! external dependency: identity, affine point addition/doubling, scalar
//! multiplication, equality, and point-from-(x, parity) reconstruction.
//! Nothing outside `curve` reaches into a field element directly.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Pow, Zero};

use crate::error::CoreError;

/// A short-Weierstrass curve `y² = x³ + ax + b mod p`, with `a` fixed to
/// `-3` (represented as `p - 3`) as specified by every curve in the table.
#[derive(Debug, Clone)]
pub struct Curve {
    p: BigUint,
    /// `a mod p`, i.e. `p - 3`.
    a: BigUint,
    b: BigUint,
}

/// A point on a [`Curve`]: either the identity (point at infinity) or an
/// affine coordinate pair reduced modulo the curve's field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Point {
    /// The additive identity.
    Identity,
    /// An affine point `(x, y)`.
    Affine(BigUint, BigUint),
}

impl Curve {
    /// Build a curve from its field modulus `p` and Weierstrass coefficient
    /// `b`. `a` is fixed to `-3 mod p`.
    #[must_use]
    pub fn new(p: BigUint, b: BigUint) -> Self {
        let three = BigUint::from(3u8);
        let a = &p - (three % &p);
        Self { p, a, b }
    }

    /// The field modulus.
    #[must_use]
    pub const fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Whether `x` is a valid field element, i.e. `0 <= x < p`.
    fn in_field(&self, x: &BigUint) -> bool {
        x < self.modulus()
    }

    /// Reduce `v` modulo the curve's field.
    fn reduce(&self, v: &BigUint) -> BigUint {
        v % &self.p
    }

    fn add_mod(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.reduce(&(a + b))
    }

    fn sub_mod(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a >= b {
            self.reduce(&(a - b))
        } else {
            self.reduce(&(a + &self.p - self.reduce(b)))
        }
    }

    fn mul_mod(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.reduce(&(a * b))
    }

    /// Modular inverse via Fermat's little theorem (`p` is prime for every
    /// table entry): `a^(p-2) mod p`.
    fn inv_mod(&self, a: &BigUint) -> BigUint {
        let exponent = &self.p - BigUint::from(2u8);
        a.modpow(&exponent, &self.p)
    }

    /// Modular square root. Returns `None` if `w` is not a quadratic
    /// residue mod `p`.
    ///
    /// P-192, P-256 and P-384 satisfy `p ≡ 3 (mod 4)`, so their root is a
    /// single exponentiation: `y = w^((p+1)/4) mod p`. P-224's modulus is
    /// `≡ 1 (mod 4)` and has no such shortcut, so that case falls through
    /// to the general Tonelli-Shanks algorithm.
    fn sqrt_mod(&self, w: &BigUint) -> Option<BigUint> {
        let residue = self.reduce(w);
        if residue.is_zero() {
            return Some(residue);
        }

        let p_minus_one = &self.p - BigUint::one();
        let euler_exponent = &p_minus_one / BigUint::from(2u8);
        if residue.modpow(&euler_exponent, &self.p) != BigUint::one() {
            return None;
        }

        let four = BigUint::from(4u8);
        if (&self.p) % &four == BigUint::from(3u8) {
            let exponent = (&self.p + BigUint::one()) / &four;
            return Some(residue.modpow(&exponent, &self.p));
        }

        Some(self.tonelli_shanks(&residue, &p_minus_one, &euler_exponent))
    }

    /// General Tonelli-Shanks square root, for primes that don't satisfy
    /// `p ≡ 3 (mod 4)`. Assumes `w` is already confirmed a nonzero
    /// quadratic residue mod `p` (checked by the caller via Euler's
    /// criterion).
    fn tonelli_shanks(&self, w: &BigUint, p_minus_one: &BigUint, euler_exponent: &BigUint) -> BigUint {
        let two = BigUint::from(2u8);
        let mut queue = p_minus_one.clone();
        let mut twos = 0u32;
        while queue.is_even() {
            queue = &queue / &two;
            twos += 1;
        }

        let mut non_residue = two.clone();
        while non_residue.modpow(euler_exponent, &self.p) != *p_minus_one {
            non_residue += BigUint::one();
        }

        let mut shift = twos;
        let mut scale = non_residue.modpow(&queue, &self.p);
        let mut residual = w.modpow(&queue, &self.p);
        let mut root = w.modpow(&((&queue + BigUint::one()) / &two), &self.p);

        while residual != BigUint::one() {
            let mut order = 0u32;
            let mut probe = residual.clone();
            while probe != BigUint::one() {
                probe = self.mul_mod(&probe, &probe);
                order += 1;
            }
            let half_exponent = Pow::pow(BigUint::from(2u8), shift - order - 1);
            let halving = scale.modpow(&half_exponent, &self.p);
            shift = order;
            scale = self.mul_mod(&halving, &halving);
            residual = self.mul_mod(&residual, &scale);
            root = self.mul_mod(&root, &halving);
        }

        root
    }

    /// Point doubling/addition via the standard affine chord-and-tangent
    /// formulas.
    #[must_use]
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Point {
        match (lhs, rhs) {
            (Point::Identity, other) | (other, Point::Identity) => other.clone(),
            (Point::Affine(x1, y1), Point::Affine(x2, y2)) => {
                if x1 == x2 {
                    if self.add_mod(y1, y2).is_zero() {
                        return Point::Identity;
                    }
                    self.double(x1, y1)
                } else {
                    let numerator = self.sub_mod(y2, y1);
                    let denominator = self.sub_mod(x2, x1);
                    let slope = self.mul_mod(&numerator, &self.inv_mod(&denominator));
                    self.combine(x1, y1, x2, &slope)
                }
            }
        }
    }

    fn double(&self, x: &BigUint, y: &BigUint) -> Point {
        if y.is_zero() {
            return Point::Identity;
        }
        let three_x_sq = self.mul_mod(&BigUint::from(3u8), &self.mul_mod(x, x));
        let numerator = self.add_mod(&three_x_sq, &self.a);
        let denominator = self.add_mod(y, y);
        let slope = self.mul_mod(&numerator, &self.inv_mod(&denominator));
        self.combine(x, y, x, &slope)
    }

    /// Shared tail of addition/doubling once the slope is known:
    /// `x3 = slope² - x1 - x2`, `y3 = slope(x1 - x3) - y1`.
    fn combine(&self, x1: &BigUint, y1: &BigUint, x2: &BigUint, slope: &BigUint) -> Point {
        let slope_sq = self.mul_mod(slope, slope);
        let x3 = self.sub_mod(&self.sub_mod(&slope_sq, x1), x2);
        let y3 = self.sub_mod(&self.mul_mod(slope, &self.sub_mod(x1, &x3)), y1);
        Point::Affine(x3, y3)
    }

    /// Scalar multiplication via double-and-add, most-significant bit
    /// first.
    #[must_use]
    pub fn scalar_mul(&self, point: &Point, scalar: &BigUint) -> Point {
        let mut acc = Point::Identity;
        for bit in bits_msb_first(scalar) {
            acc = self.add(&acc, &acc);
            if bit {
                acc = self.add(&acc, point);
            }
        }
        acc
    }

    /// Reconstruct a point from its x-coordinate and the parity (LSB) of
    /// its y-coordinate, by solving `y² = x³ + ax + b mod p` and picking
    /// the matching root.
    pub fn point_from_x_parity(&self, x: &BigUint, parity: u8) -> Result<Point, CoreError> {
        if !self.in_field(x) {
            return Err(CoreError::NotOnCurve);
        }
        let x_sq = self.mul_mod(x, x);
        let x_cubed = self.mul_mod(&x_sq, x);
        let ax = self.mul_mod(&self.a, x);
        let rhs = self.add_mod(&self.add_mod(&x_cubed, &ax), &self.b);
        let root = self.sqrt_mod(&rhs).ok_or(CoreError::NotOnCurve)?;
        let root_parity = parity_of(&root);
        let y = if root_parity == parity {
            root
        } else {
            self.sub_mod(&self.p, &root)
        };
        Ok(Point::Affine(x.clone(), y))
    }
}

impl Point {
    /// The y-parity bit (LSB of `y`), or `None` for the identity.
    #[must_use]
    pub fn y_parity(&self) -> Option<u8> {
        match self {
            Point::Identity => None,
            Point::Affine(_, y) => Some(parity_of(y)),
        }
    }

    /// The x-coordinate, or `None` for the identity.
    #[must_use]
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine(x, _) => Some(x),
        }
    }
}

fn parity_of(v: &BigUint) -> u8 {
    if v.is_odd() { 1 } else { 0 }
}

/// Iterate over a `BigUint`'s bits, most-significant first, skipping
/// leading zero bits (the identity scalar `0` yields no bits, so
/// [`Curve::scalar_mul`] correctly returns [`Point::Identity`]).
fn bits_msb_first(scalar: &BigUint) -> impl Iterator<Item = bool> {
    scalar.to_radix_be(2).into_iter().map(|digit| digit != 0)
}
