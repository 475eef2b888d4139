//! Field arithmetic tests.

use bigfield::{
    Error, PrimeField,
    bigint::{BigInt, BigUint},
};
use hex_literal::hex;
use proptest::prelude::*;

/// P-256 base field modulus.
const P256_MODULUS: [u8; 32] =
    hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

fn p256_field() -> PrimeField {
    PrimeField::new(BigUint::from_bytes_be(&P256_MODULUS)).unwrap()
}

fn gf97() -> PrimeField {
    PrimeField::new(BigUint::from(97u8)).unwrap()
}

prop_compose! {
    fn field_element()(bytes in any::<[u8; 32]>()) -> BigUint {
        p256_field().reduce_uint(&BigUint::from_bytes_be(&bytes))
    }
}

#[test]
fn inverse_of_zero_fails() {
    assert_eq!(gf97().invert(&BigUint::from(0u8)), Err(Error::NoInverse));
    assert_eq!(
        p256_field().invert(&BigUint::from_bytes_be(&P256_MODULUS)),
        Err(Error::NoInverse)
    );
}

#[test]
fn error_display() {
    assert_eq!(
        Error::NoInverse.to_string(),
        "field element has no multiplicative inverse"
    );
}

proptest! {
    #[test]
    fn reduce_matches_rem_euclid(x in any::<i64>()) {
        let field = gf97();
        let expected = BigUint::from(x.rem_euclid(97) as u64);
        prop_assert_eq!(field.reduce(&BigInt::from(x)), expected);
    }

    #[test]
    fn reduce_is_canonical(
        bytes in proptest::collection::vec(any::<u8>(), 48),
        negative in any::<bool>(),
    ) {
        let field = p256_field();
        let mut x = BigInt::from(BigUint::from_bytes_be(&bytes));
        if negative {
            x = -x;
        }
        let r = field.reduce(&x);
        prop_assert!(field.contains(&r));
        prop_assert_eq!(field.add(&r, &field.reduce(&-x)), BigUint::from(0u8));
    }

    #[test]
    fn sub_then_add_roundtrips(a in field_element(), b in field_element()) {
        let field = p256_field();
        prop_assert_eq!(field.add(&field.sub(&a, &b), &b), a.clone());
        prop_assert_eq!(field.add(&a, &field.neg(&a)), BigUint::from(0u8));
    }

    #[test]
    fn invert_is_multiplicative_inverse(a in field_element()) {
        prop_assume!(a != BigUint::from(0u8));
        let field = p256_field();
        let inv = field.invert(&a).unwrap();
        prop_assert_eq!(field.mul(&a, &inv), BigUint::from(1u8));
    }

    #[test]
    fn sqrt_of_square(a in field_element()) {
        let field = p256_field();
        let square = field.square(&a);
        let root = field.sqrt(&square).unwrap();
        prop_assert!(root == a || root == field.neg(&a));
    }

    #[test]
    fn sqrt_of_square_tonelli_shanks(a in 0u32..97) {
        let field = gf97();
        let a = BigUint::from(a);
        let square = field.square(&a);
        let root = field.sqrt(&square).unwrap();
        prop_assert_eq!(field.square(&root), square);
    }
}
