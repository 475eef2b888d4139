//! Curve context.

use crate::{Error, Point, Result};
use bigfield::PrimeField;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// Short Weierstrass curve `y² = x³ + a·x + b` over the prime field `GF(p)`.
///
/// The context is immutable once constructed. Every group operation borrows
/// it read-only, so a single `Curve` may be shared between threads.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Curve {
    /// Base field.
    field: PrimeField,

    /// Coefficient `a` in the curve equation, reduced mod p.
    a: BigUint,

    /// Coefficient `b` in the curve equation, reduced mod p.
    b: BigUint,
}

impl Curve {
    /// Create a curve over `GF(p)` with equation coefficients `a` and `b`.
    ///
    /// The coefficients may be negative; they are reduced mod `p`. Only the
    /// structure of `p` is checked (see [`PrimeField::new`]), and the curve
    /// is not required to be non-singular (see [`Curve::is_singular`]).
    pub fn new(p: BigUint, a: &BigInt, b: &BigInt) -> Result<Self> {
        Ok(Self::from_field(PrimeField::new(p)?, a, b))
    }

    /// Create a curve over an existing field context.
    pub fn from_field(field: PrimeField, a: &BigInt, b: &BigInt) -> Self {
        let a = field.reduce(a);
        let b = field.reduce(b);
        Self { field, a, b }
    }

    /// Base field of the curve.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Is the discriminant `4a³ + 27b²` zero mod p?
    ///
    /// The group law is only guaranteed for non-singular curves. This check
    /// is informational: singular curves can still be constructed.
    pub fn is_singular(&self) -> bool {
        let field = &self.field;
        let a3 = field.mul(&field.square(&self.a), &self.a);
        let b2 = field.square(&self.b);
        let disc = field.add(
            &field.mul(&BigUint::from(4u8), &a3),
            &field.mul(&BigUint::from(27u8), &b2),
        );
        disc.is_zero()
    }

    /// Does `point` lie on the curve?
    ///
    /// The identity is always valid. An affine point is valid iff both
    /// coordinates are in `[0, p)` and `y² ≡ x³ + a·x + b (mod p)`.
    pub fn validate(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => {
                self.field.contains(x)
                    && self.field.contains(y)
                    && self.field.square(y) == self.equation_rhs(x)
            }
        }
    }

    /// Create a point from affine coordinates, checking that it is on the curve.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point> {
        let point = Point::Affine { x, y };

        if self.validate(&point) {
            Ok(point)
        } else {
            Err(Error::InvalidPoint)
        }
    }

    /// Recover the point with the given x-coordinate and y-parity.
    ///
    /// Returns `None` if `x` is not reduced or `x³ + a·x + b` is not a square.
    pub fn lift_x(&self, x: &BigUint, y_is_odd: bool) -> Option<Point> {
        if !self.field.contains(x) {
            return None;
        }

        let beta = self.field.sqrt(&self.equation_rhs(x))?;
        let y = if beta.bit(0) == y_is_odd {
            beta
        } else {
            self.field.neg(&beta)
        };

        Some(Point::Affine { x: x.clone(), y })
    }

    /// Right-hand side of the curve equation: `x³ + a·x + b`.
    pub(crate) fn equation_rhs(&self, x: &BigUint) -> BigUint {
        let field = &self.field;
        let x3 = field.mul(&field.square(x), x);
        field.add(&field.add(&x3, &field.mul(&self.a, x)), &self.b)
    }
}
