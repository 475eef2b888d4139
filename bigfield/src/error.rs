//! Error types.

use core::fmt;

/// Field arithmetic errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Attempted to invert an element congruent to zero.
    NoInverse,

    /// Modulus is even or smaller than 3.
    InvalidModulus,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoInverse => f.write_str("field element has no multiplicative inverse"),
            Error::InvalidModulus => f.write_str("field modulus must be an odd integer >= 3"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
