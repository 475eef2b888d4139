//! Prime field context.

use crate::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// Prime field `GF(p)` with a modulus chosen at runtime.
///
/// Elements are represented as [`BigUint`] values. Every operation accepts
/// arbitrary non-negative inputs and returns its result in canonical form,
/// i.e. in the range `[0, p)`.
///
/// The modulus is assumed to be prime. Only the cheap structural properties
/// (odd, at least 3) are checked on construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimeField {
    /// p
    modulus: BigUint,

    /// p - 2
    modulus_minus_two: BigUint,
}

impl PrimeField {
    /// Create a new field context for the modulus `p`.
    ///
    /// Returns [`Error::InvalidModulus`] if `p` is even or smaller than 3.
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(3u8) || !modulus.bit(0) {
            return Err(Error::InvalidModulus);
        }

        let modulus_minus_two = &modulus - 2u32;

        Ok(Self {
            modulus,
            modulus_minus_two,
        })
    }

    /// The field modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Is `x` a canonical element, i.e. `0 <= x < p`?
    pub fn contains(&self, x: &BigUint) -> bool {
        x < &self.modulus
    }

    /// Reduce a signed integer into `[0, p)`.
    ///
    /// This is the mathematical modulo: negative inputs map to `p - (|x| mod p)`
    /// rather than to a negative remainder.
    pub fn reduce(&self, x: &BigInt) -> BigUint {
        let r = x.magnitude() % &self.modulus;

        if x.sign() == Sign::Minus && !r.is_zero() {
            &self.modulus - r
        } else {
            r
        }
    }

    /// Reduce an unsigned integer into `[0, p)`.
    pub fn reduce_uint(&self, x: &BigUint) -> BigUint {
        x % &self.modulus
    }

    /// Returns `a + b mod p`.
    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// Returns `a - b mod p`.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce_uint(a);
        let b = self.reduce_uint(b);

        if a >= b {
            a - b
        } else {
            &self.modulus - b + a
        }
    }

    /// Returns `-a mod p`.
    pub fn neg(&self, a: &BigUint) -> BigUint {
        let a = self.reduce_uint(a);

        if a.is_zero() { a } else { &self.modulus - a }
    }

    /// Returns `2a mod p`.
    pub fn double(&self, a: &BigUint) -> BigUint {
        (a << 1u8) % &self.modulus
    }

    /// Returns `a * b mod p`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    /// Returns `a^2 mod p`.
    pub fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Returns `base^exp mod p`.
    pub fn pow(&self, base: &BigUint, exp: &BigUint) -> BigUint {
        base.modpow(exp, &self.modulus)
    }

    /// Returns the multiplicative inverse of `a`.
    ///
    /// Computed as `a^(p - 2)` by Fermat's little theorem, which relies on
    /// `p` being prime. Returns [`Error::NoInverse`] if `a ≡ 0 (mod p)`.
    pub fn invert(&self, a: &BigUint) -> Result<BigUint> {
        let a = self.reduce_uint(a);

        if a.is_zero() {
            return Err(Error::NoInverse);
        }

        Ok(self.pow(&a, &self.modulus_minus_two))
    }

    /// Is `a` a quadratic residue mod `p`? Zero counts as a square.
    ///
    /// Uses Euler's criterion: `a^((p - 1) / 2) ≡ 1`.
    pub fn is_square(&self, a: &BigUint) -> bool {
        let a = self.reduce_uint(a);
        a.is_zero() || self.pow(&a, &((&self.modulus - 1u32) >> 1u8)).is_one()
    }
}
