#![no_main]
// Targets: bigcurve over the P-256 field and over fuzzer-chosen small fields
use bigcurve::{BigInt, BigUint, Curve, Error, Point};
use libfuzzer_sys::fuzz_target;

const P256_MODULUS: &[u8] = &[
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

fn test_group(curve: &Curve, p1: &Point, p2: &Point, s: &BigInt) {
    let sum = curve.add(p1, p2).unwrap();
    let scalar_mul = curve.mul(p1, s).unwrap();

    assert!(curve.validate(&sum));
    assert!(curve.validate(&scalar_mul));

    // Test that addition and doubling are consistent
    assert_eq!(curve.double(p1).unwrap(), curve.add(p1, p1).unwrap());

    // Test that negation works correctly
    assert_eq!(curve.add(&sum, &curve.negate(&sum)).unwrap(), Point::IDENTITY);

    // Test scalar multiplication distributive property
    assert_eq!(
        curve.add(&scalar_mul, &scalar_mul).unwrap(),
        curve.mul(p1, &(s + s)).unwrap()
    );

    assert_eq!(curve.mul(p1, &(-s - 1)), Err(Error::InvalidScalar));
}

/// Map fuzzer bytes onto a curve point, falling back to the identity.
fn point(curve: &Curve, bytes: &[u8]) -> Point {
    let x = curve.field().reduce_uint(&BigUint::from_bytes_be(&bytes[1..]));
    curve
        .lift_x(&x, bytes[0] & 1 == 1)
        .unwrap_or(Point::IDENTITY)
}

/// Trial division; small-field moduli fit in 16 bits.
fn is_prime(n: &BigUint) -> bool {
    let n = n.to_u32_digits().first().copied().unwrap_or(0);
    n >= 3 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 104 {
        return;
    }

    //
    // Test the P-256 field with a fuzzer-chosen `b`

    let curve = Curve::new(
        BigUint::from_bytes_be(P256_MODULUS),
        &BigInt::from(-3),
        &BigInt::from(BigUint::from_bytes_be(&data[0..32])),
    )
    .unwrap();

    if curve.is_singular() {
        return;
    }

    let p1 = point(&curve, &data[32..65]);
    let p2 = point(&curve, &data[65..98]);
    let scalar = BigInt::from(BigUint::from_bytes_be(&data[98..104]));

    test_group(&curve, &p1, &p2, &scalar);

    //
    // Test small fields, where inverse pairs and 2-torsion points are common

    let p = BigUint::from(u16::from_be_bytes([data[0], data[1]]) | 1);
    let Ok(curve) = Curve::new(p, &BigInt::from(data[2]), &BigInt::from(data[3])) else {
        return;
    };
    if !is_prime(curve.field().modulus()) || curve.is_singular() {
        return;
    }

    let p1 = point(&curve, &data[4..7]);
    let p2 = point(&curve, &data[7..10]);
    let scalar = BigInt::from(data[10]);

    test_group(&curve, &p1, &p2, &scalar);
});
