//! Error type

use core::fmt::{self, Display};

/// Elliptic curve errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Attempted to invert a field element congruent to zero.
    ///
    /// The group law never does this for points on the curve, so this
    /// indicates an operand that is not a curve point.
    NoInverse,

    /// Field modulus is even or smaller than 3.
    InvalidModulus,

    /// Negative scalar passed to scalar multiplication.
    InvalidScalar,

    /// Coordinates do not satisfy the curve equation or are not reduced.
    InvalidPoint,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::NoInverse => "field element has no multiplicative inverse",
            Error::InvalidModulus => "field modulus must be an odd integer >= 3",
            Error::InvalidScalar => "scalar must be non-negative",
            Error::InvalidPoint => "point is not on the curve",
        })
    }
}

impl From<bigfield::Error> for Error {
    fn from(err: bigfield::Error) -> Error {
        match err {
            bigfield::Error::NoInverse => Error::NoInverse,
            bigfield::Error::InvalidModulus => Error::InvalidModulus,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type with the `bigcurve` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
