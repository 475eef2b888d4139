//! Modular square root implementations, adapted from <https://eprint.iacr.org/2012/685.pdf>.

use crate::PrimeField;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Square root algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Algorithm {
    /// Atkin's algorithm for `p ≡ 5 (mod 8)`.
    Atkin,

    /// Shanks algorithm for `p ≡ 3 (mod 4)`.
    Shanks,

    /// Tonelli-Shanks algorithm for any odd prime.
    TonelliShanks,
}

impl Algorithm {
    /// Determine the best algorithm to use with a particular modulus.
    fn for_modulus(p: &BigUint) -> Self {
        if mod_residue(p, 4) == 3 {
            Self::Shanks
        } else if mod_residue(p, 8) == 5 {
            Self::Atkin
        } else {
            Self::TonelliShanks
        }
    }
}

impl PrimeField {
    /// Returns a square root of `a` mod p, or `None` if `a` is not a square.
    ///
    /// Which of the two roots is returned depends on the algorithm selected
    /// for the modulus; callers needing a particular root should normalize it.
    pub fn sqrt(&self, a: &BigUint) -> Option<BigUint> {
        let a = self.reduce_uint(a);

        if a.is_zero() {
            return Some(a);
        }

        let root = match Algorithm::for_modulus(self.modulus()) {
            Algorithm::Atkin => self.sqrt_atkin(&a),
            Algorithm::Shanks => self.sqrt_shanks(&a),
            Algorithm::TonelliShanks => self.sqrt_tonelli_shanks(&a)?,
        };

        (self.square(&root) == a).then_some(root)
    }

    /// Atkin's algorithm for `p ≡ 5 (mod 8)`.
    ///
    /// From <https://eprint.iacr.org/2012/685.pdf> (page 10, algorithm 3)
    fn sqrt_atkin(&self, a: &BigUint) -> BigUint {
        debug_assert_eq!(mod_residue(self.modulus(), 8), 5);

        let mod_minus_5_over_8 = (self.modulus() - 5u32) >> 3u8;

        let b = self.pow(&self.double(a), &mod_minus_5_over_8);
        let ab = self.mul(a, &b);
        let i = self.mul(&self.double(&ab), &b);
        self.mul(&ab, &self.sub(&i, &BigUint::one()))
    }

    /// Shanks algorithm for `p ≡ 3 (mod 4)`.
    ///
    /// For `p ≡ 3 (mod 4)`, sqrt can be computed with only one exponentiation as
    /// `a^((p + 1) / 4) (mod p)`.
    fn sqrt_shanks(&self, a: &BigUint) -> BigUint {
        debug_assert_eq!(mod_residue(self.modulus(), 4), 3);

        let mod_plus_1_over_4 = (self.modulus() + 1u32) >> 2u8;
        self.pow(a, &mod_plus_1_over_4)
    }

    /// Tonelli-Shanks algorithm works for every odd prime.
    ///
    /// Returns `None` early when `a` turns out to be a non-residue.
    fn sqrt_tonelli_shanks(&self, a: &BigUint) -> Option<BigUint> {
        // p - 1 = q * 2^s with q odd
        let p_minus_1 = self.modulus() - 1u32;
        let s = p_minus_1.trailing_zeros()?;
        let q = &p_minus_1 >> s;

        let mut m = s;
        let mut c = self.pow(&self.non_residue(), &q);
        let mut t = self.pow(a, &q);
        let mut r = self.pow(a, &((&q + 1u32) >> 1u8));

        while !t.is_one() {
            // least i in (0, m) with t^(2^i) = 1
            let mut i = 0;
            let mut t2i = t.clone();
            while !t2i.is_one() {
                t2i = self.square(&t2i);
                i += 1;
                if i == m {
                    return None;
                }
            }

            let b = self.pow(&c, &(BigUint::one() << (m - i - 1)));
            m = i;
            c = self.square(&b);
            t = self.mul(&t, &c);
            r = self.mul(&r, &b);
        }

        Some(r)
    }

    /// Smallest quadratic non-residue, found by linear search from 2.
    fn non_residue(&self) -> BigUint {
        let mut z = BigUint::from(2u8);
        while self.is_square(&z) {
            z += 1u32;
        }
        z
    }
}

/// Compute residue classes of the modulus for selecting particular square root algorithms.
fn mod_residue(p: &BigUint, n: u32) -> u32 {
    let residue = p % n;
    residue.to_u32_digits().first().copied().unwrap_or(0)
}
