//! Build check: `bigcurve` links without `std`.

#![no_std]

use bigcurve::{BigInt, BigUint, Curve, Point, Result};

/// Double a point on `y² = x³ + 2x + 3` over GF(97).
pub fn double_toy_point() -> Result<Point> {
    let curve = Curve::new(BigUint::from(97u8), &BigInt::from(2), &BigInt::from(3))?;
    curve.double(&Point::from_affine(3u8, 6u8))
}
