//! Error types.

use core::fmt::{self, Display, Formatter};

/// Curve operation errors
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Scalar encoding is wider than 32 bytes
    ScalarLength,
    /// Coordinate is wider than 32 bytes or not reduced modulo `p`
    CoordinateRange,
    /// Point does not satisfy the curve equation
    NotOnCurve,
    /// Attempted to invert zero modulo `p`
    NotInvertible,
    /// Random number generator failed
    Rng,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::ScalarLength => write!(f, "scalar is wider than 32 bytes"),
            Error::CoordinateRange => {
                write!(f, "coordinate is not a canonical field element")
            }
            Error::NotOnCurve => write!(f, "point is not on the curve"),
            Error::NotInvertible => write!(f, "value is not invertible modulo p"),
            Error::Rng => write!(f, "random number generator failure"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
