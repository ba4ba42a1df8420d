//! Generic elliptic curve interface over affine big integer coordinates.

use alloc::vec;
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::{CurveParams, Error, Result};

#[cfg(any(feature = "critical-section", feature = "std"))]
use crate::Ed25519;

#[cfg(feature = "critical-section")]
use once_cell::sync::Lazy as LazyLock;
#[cfg(all(feature = "std", not(feature = "critical-section")))]
use std::sync::LazyLock;

/// Big-endian private scalar bytes, wiped on drop.
pub type PrivateKey = Zeroizing<Vec<u8>>;

/// An elliptic curve whose points are exchanged as affine `(x, y)` pairs of
/// big integers.
///
/// Scalars are big-endian byte strings.
pub trait Curve {
    /// Parameters of this curve.
    fn params(&self) -> &CurveParams;

    /// Reports whether `(x, y)` is a point on the curve.
    ///
    /// Coordinates that are not reduced modulo `p` are never on the curve.
    fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool;

    /// Returns the sum of `(x1, y1)` and `(x2, y2)`.
    fn add(
        &self,
        x1: &BigUint,
        y1: &BigUint,
        x2: &BigUint,
        y2: &BigUint,
    ) -> Result<(BigUint, BigUint)>;

    /// Returns `2 * (x, y)`.
    fn double(&self, x: &BigUint, y: &BigUint) -> Result<(BigUint, BigUint)> {
        self.add(x, y, x, y)
    }

    /// Returns `k * (x, y)`.
    ///
    /// Scalars longer than 32 bytes are rejected by length, even when the
    /// extra leading bytes are zero.
    fn scalar_mult(&self, x: &BigUint, y: &BigUint, k: &[u8]) -> Result<(BigUint, BigUint)>;

    /// Returns `k * G`, where `G` is the base point of the curve.
    ///
    /// Scalars longer than 32 bytes are rejected by length, as in
    /// [`Curve::scalar_mult`].
    fn scalar_base_mult(&self, k: &[u8]) -> Result<(BigUint, BigUint)>;
}

/// Shared, lazily constructed instance of the Ed25519 curve.
///
/// The first caller constructs it; concurrent first callers block until it
/// is ready.
#[cfg(any(feature = "critical-section", feature = "std"))]
pub fn ed25519() -> &'static Ed25519 {
    static CURVE: LazyLock<Ed25519> = LazyLock::new(Ed25519::new);
    &CURVE
}

/// Masks applied to the leading byte of a candidate private key, indexed by
/// the bit length of the group order modulo 8.
const MASKS: [u8; 8] = [0xff, 0x01, 0x03, 0x07, 0x0f, 0x1f, 0x3f, 0x7f];

/// Generate a key pair: a private scalar `k` drawn uniformly from `[1, n)`
/// and the public point `k * G`.
///
/// Candidates are drawn by rejection sampling. Each draw is accepted with
/// probability above one half.
pub fn generate_key<C, R>(curve: &C, rng: &mut R) -> Result<(PrivateKey, BigUint, BigUint)>
where
    C: Curve + ?Sized,
    R: CryptoRngCore + ?Sized,
{
    let n = &curve.params().n;
    let bit_len = n.bits();
    let byte_len = bit_len.div_ceil(8) as usize;
    let mask = MASKS[(bit_len % 8) as usize];

    let mut private = Zeroizing::new(vec![0u8; byte_len]);
    loop {
        rng.try_fill_bytes(&mut private).map_err(|_| Error::Rng)?;
        private[0] &= mask;

        let candidate = BigUint::from_bytes_be(&private);
        if !candidate.is_zero() && candidate < *n {
            break;
        }
    }

    let (x, y) = curve.scalar_base_mult(&private)?;
    Ok((private, x, y))
}
