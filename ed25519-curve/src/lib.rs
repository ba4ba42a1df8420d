#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![allow(non_snake_case)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! use ed25519_curve::{Curve, Ed25519};
//!
//! let curve = Ed25519::new();
//! let params = curve.params();
//!
//! let (x, y) = curve.scalar_base_mult(&[1])?;
//! assert_eq!((&x, &y), (&params.gx, &params.gy));
//! assert!(curve.is_on_curve(&x, &y));
//!
//! let (x2, y2) = curve.double(&x, &y)?;
//! assert_eq!((x2, y2), curve.scalar_mult(&x, &y, &[2])?);
//! # Ok::<(), ed25519_curve::Error>(())
//! ```

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

mod arithmetic;
mod curve;
mod error;
mod params;

pub mod encoding;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    curve::{Curve, PrivateKey, generate_key},
    error::{Error, Result},
    params::CurveParams,
};
pub use curve25519_dalek;
pub use num_bigint::{self, BigUint};
pub use rand_core;

#[cfg(any(feature = "critical-section", feature = "std"))]
pub use crate::curve::ed25519;

use crate::arithmetic::{AffinePoint, ExtendedPoint, ScalarBytes};
use num_traits::One;

/// Ed25519's twisted Edwards curve: `-x² + y² = 1 + d·x²·y²` over `GF(2^255 - 19)`.
///
/// Holds the curve parameters along with the curve constant `d` and its
/// negation, derived once at construction. The value is immutable, so a
/// single instance may be shared freely between threads.
///
/// Point arithmetic on the boundary uses affine coordinates encoded as
/// [`BigUint`]s. [`Curve::add`] is a slow big integer reference path, whereas
/// [`Curve::scalar_mult`] and [`Curve::scalar_base_mult`] delegate to
/// `curve25519-dalek`'s constant-time scalar multiplication.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ed25519 {
    params: CurveParams,
    d: BigUint,
    neg_d: BigUint,
}

impl Ed25519 {
    /// Fixed numerator of the curve constant: `d = -121665 / 121666`.
    const D_NUMERATOR: u32 = 121665;

    /// Fixed denominator of the curve constant: `d = -121665 / 121666`.
    const D_DENOMINATOR: u32 = 121666;

    /// Construct the curve, deriving `d` and `-d` from the field prime.
    ///
    /// # Panics
    ///
    /// If `121666` has no inverse modulo `p`, which cannot happen for the
    /// Ed25519 prime.
    pub fn new() -> Self {
        let params = CurveParams::ed25519();

        let denominator = BigUint::from(Self::D_DENOMINATOR);
        let inverse = mod_inverse(&denominator, &params.p)
            .expect("121666 is invertible modulo 2^255 - 19");

        // d = -121665 * 121666^-1 mod p
        let d = (&params.p - BigUint::from(Self::D_NUMERATOR)) * inverse % &params.p;
        let neg_d = &params.p - &d;

        Self { params, d, neg_d }
    }

    /// The curve constant `d`.
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// The negation of the curve constant, `p - d`.
    pub fn neg_d(&self) -> &BigUint {
        &self.neg_d
    }
}

impl Default for Ed25519 {
    fn default() -> Self {
        Self::new()
    }
}

impl Curve for Ed25519 {
    fn params(&self) -> &CurveParams {
        &self.params
    }

    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        AffinePoint::from_coordinates(x, y)
            .map(|point| bool::from(point.is_on_curve()))
            .unwrap_or(false)
    }

    fn add(
        &self,
        x1: &BigUint,
        y1: &BigUint,
        x2: &BigUint,
        y2: &BigUint,
    ) -> Result<(BigUint, BigUint)> {
        let p = &self.params.p;

        let x1x2 = x1 * x2;
        let y1y2 = y1 * y2;
        let x1y2 = x1 * y2;
        let y1x2 = y1 * x2;
        let x1x2y1y2 = &x1x2 * &y1y2;

        // 1 + d·x1·x2·y1·y2 and 1 - d·x1·x2·y1·y2
        let one_add_denom = (BigUint::one() + &self.d * &x1x2y1y2) % p;
        let one_sub_denom = (BigUint::one() + &self.neg_d * &x1x2y1y2) % p;

        let x = (x1y2 + y1x2) * mod_inverse(&one_add_denom, p)? % p;
        let y = (y1y2 + x1x2) * mod_inverse(&one_sub_denom, p)? % p;

        Ok((x, y))
    }

    fn scalar_mult(&self, x1: &BigUint, y1: &BigUint, k: &[u8]) -> Result<(BigUint, BigUint)> {
        let point = AffinePoint::from_coordinates(x1, y1)?.to_extended();
        if !bool::from(point.is_on_curve()) {
            return Err(Error::NotOnCurve);
        }

        let scalar = ScalarBytes::from_be_slice(k)?;
        let product = scalar.mul(&point.to_dalek()?);

        Ok(ExtendedPoint::from_dalek(&product)?
            .to_affine()?
            .to_coordinates())
    }

    fn scalar_base_mult(&self, k: &[u8]) -> Result<(BigUint, BigUint)> {
        let scalar = ScalarBytes::from_be_slice(k)?;
        let product = scalar.mul_base();

        Ok(ExtendedPoint::from_dalek(&product)?
            .to_affine()?
            .to_coordinates())
    }
}

/// Compute `a⁻¹ mod p`.
///
/// Returns [`Error::NotInvertible`] when `a` shares a factor with `p`.
pub(crate) fn mod_inverse(a: &BigUint, p: &BigUint) -> Result<BigUint> {
    (a % p).modinv(p).ok_or(Error::NotInvertible)
}
