//! Point arithmetic: the chord-and-tangent group law in affine coordinates.

use crate::{Curve, Point, Result};
use num_bigint::BigUint;

impl Curve {
    /// Returns `-point`.
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: self.field().neg(y),
            },
        }
    }

    /// Returns `lhs + rhs`.
    ///
    /// Cases are resolved in this order:
    ///
    /// 1. either operand is the identity: return the other one;
    /// 2. `rhs == -lhs` (which covers doubling a point with `y = 0`): return
    ///    the identity;
    /// 3. `lhs == rhs`: tangent slope `(3x² + a) / 2y`;
    /// 4. otherwise: chord slope `(y₂ - y₁) / (x₂ - x₁)`.
    ///
    /// Two distinct curve points share an x-coordinate only when they are
    /// negatives of each other, so for valid operands neither slope
    /// denominator can vanish. If it does, one of the operands is not on the
    /// curve and [`Error::NoInverse`] is returned.
    ///
    /// [`Error::NoInverse`]: crate::Error::NoInverse
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        let (x1, y1) = match lhs {
            Point::Identity => return Ok(rhs.clone()),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match rhs {
            Point::Identity => return Ok(lhs.clone()),
            Point::Affine { x, y } => (x, y),
        };

        let field = self.field();

        if x1 == x2 && *y2 == field.neg(y1) {
            return Ok(Point::Identity);
        }

        let lambda = if lhs == rhs {
            let numerator = field.add(
                &field.mul(&BigUint::from(3u8), &field.square(x1)),
                self.a(),
            );
            field.mul(&numerator, &field.invert(&field.double(y1))?)
        } else {
            let numerator = field.sub(y2, y1);
            field.mul(&numerator, &field.invert(&field.sub(x2, x1))?)
        };

        let x3 = field.sub(&field.sub(&field.square(&lambda), x1), x2);
        let y3 = field.sub(&field.mul(&lambda, &field.sub(x1, &x3)), y1);
        let sum = Point::Affine { x: x3, y: y3 };

        debug_assert!(self.validate(&sum), "point addition left the curve");
        Ok(sum)
    }

    /// Returns `point + point`.
    pub fn double(&self, point: &Point) -> Result<Point> {
        self.add(point, point)
    }

    /// Returns `lhs - rhs`.
    pub fn sub(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        self.add(lhs, &self.negate(rhs))
    }
}
