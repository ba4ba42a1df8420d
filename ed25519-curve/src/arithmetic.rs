//! Internal point arithmetic: field elements, affine and extended
//! coordinates, and the bridge to `curve25519-dalek`.

mod affine;
mod extended;
pub(crate) mod field;
mod scalar;

pub(crate) use self::{affine::AffinePoint, extended::ExtendedPoint, scalar::ScalarBytes};
