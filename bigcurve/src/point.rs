//! Curve points.

use num_bigint::BigUint;

/// Point on a short Weierstrass curve: either the identity element or an
/// affine point.
///
/// The identity is its own variant rather than a sentinel coordinate pair, so
/// `(0, 0)` is an ordinary affine point wherever it satisfies the curve
/// equation.
///
/// Points are not tied to a curve and are not validated on construction; see
/// [`Curve::validate`] and [`Curve::point`].
///
/// [`Curve::validate`]: crate::Curve::validate
/// [`Curve::point`]: crate::Curve::point
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Point {
    /// Additive identity of the group a.k.a. the point at infinity.
    #[default]
    Identity,

    /// Point with affine coordinates.
    Affine {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self::Identity;

    /// Create an affine point from its coordinates.
    pub fn from_affine(x: impl Into<BigUint>, y: impl Into<BigUint>) -> Self {
        Self::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    /// Affine coordinates `(x, y)`, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Self::Identity => None,
            Self::Affine { x, y } => Some((x, y)),
        }
    }

    /// Affine x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    /// Affine y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }
}

impl From<(BigUint, BigUint)> for Point {
    fn from((x, y): (BigUint, BigUint)) -> Point {
        Point::Affine { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::Point;
    use num_bigint::BigUint;

    #[test]
    fn origin_is_not_identity() {
        let origin = Point::from_affine(0u8, 0u8);
        assert!(!origin.is_identity());
        assert_ne!(origin, Point::IDENTITY);
        assert_eq!(origin.coordinates(), Some((&BigUint::from(0u8), &BigUint::from(0u8))));
    }

    #[test]
    fn identity_has_no_coordinates() {
        assert!(Point::default().is_identity());
        assert_eq!(Point::IDENTITY.x(), None);
        assert_eq!(Point::IDENTITY.y(), None);
    }

    #[test]
    fn structural_equality() {
        let p = Point::from_affine(3u8, 6u8);
        assert_eq!(p, Point::from((BigUint::from(3u8), BigUint::from(6u8))));
        assert_ne!(p, Point::from_affine(3u8, 91u8));
        assert_eq!(p.x(), Some(&BigUint::from(3u8)));
        assert_eq!(p.y(), Some(&BigUint::from(6u8)));
    }
}
