//! Scalar multiplication.

use crate::{Curve, Error, Point, Result};
use core::{cmp, mem};
use num_bigint::{BigInt, BigUint, Sign};

impl Curve {
    /// Returns `k·point`.
    ///
    /// Returns [`Error::InvalidScalar`] if `k` is negative. The scalar is not
    /// reduced modulo the group order.
    pub fn mul(&self, point: &Point, k: &BigInt) -> Result<Point> {
        if k.sign() == Sign::Minus {
            return Err(Error::InvalidScalar);
        }

        self.mul_unsigned(point, k.magnitude())
    }

    /// Returns `k·point` for an unsigned scalar, using a Montgomery ladder.
    ///
    /// Every ladder step performs exactly one addition and one doubling,
    /// with the roles of the two accumulators exchanged by a swap instead of
    /// a branch on the scalar bit. The number of steps is
    /// `max(bits(k), bits(p) + 1)`, so all scalars below the Hasse bound
    /// `p + 1 + 2√p` take the same number of group operations.
    pub fn mul_unsigned(&self, point: &Point, k: &BigUint) -> Result<Point> {
        // Invariant: r1 = r0 + point
        let mut r0 = Point::Identity;
        let mut r1 = point.clone();

        let steps = cmp::max(k.bits(), self.field().bits() + 1);
        let mut swap = false;

        for i in (0..steps).rev() {
            let bit = k.bit(i);

            if swap ^ bit {
                mem::swap(&mut r0, &mut r1);
            }

            r1 = self.add(&r0, &r1)?;
            r0 = self.double(&r0)?;

            swap = bit;
        }

        if swap {
            mem::swap(&mut r0, &mut r1);
        }

        Ok(r0)
    }

    /// Returns `Σ kᵢ·Pᵢ` for the given `(Pᵢ, kᵢ)` pairs.
    pub fn lincomb(&self, terms: &[(Point, BigInt)]) -> Result<Point> {
        terms
            .iter()
            .try_fold(Point::Identity, |acc, (point, k)| {
                self.add(&acc, &self.mul(point, k)?)
            })
    }
}
