use curve25519_dalek::{EdwardsPoint as DalekPoint, Scalar};
use zeroize::Zeroizing;

use crate::{
    Error, Result,
    encoding::{ENCODED_LEN, be_to_le},
};

/// Width in bytes of each half of a split scalar.
const HALF_LEN: usize = ENCODED_LEN / 2;

/// A secret 256-bit scalar in little-endian byte order, wiped on drop.
///
/// Unlike [`Scalar`], the value is never reduced modulo the group order,
/// so multiplying a point with a small order component yields the exact
/// integer multiple.
pub(crate) struct ScalarBytes(Zeroizing<[u8; ENCODED_LEN]>);

impl ScalarBytes {
    /// Decode a big-endian scalar of at most 32 bytes.
    pub fn from_be_slice(k: &[u8]) -> Result<Self> {
        let bytes = Zeroizing::new(be_to_le(k).ok_or(Error::ScalarLength)?);
        Ok(Self(bytes))
    }

    /// Computes `k * G` using the precomputed base point table.
    ///
    /// The base point has prime order, so reducing `k` first is exact.
    pub fn mul_base(&self) -> DalekPoint {
        let scalar = Zeroizing::new(Scalar::from_bytes_mod_order(*self.0));
        DalekPoint::mul_base(&scalar)
    }

    /// Computes `k * point` without reducing `k` modulo the group order.
    pub fn mul(&self, point: &DalekPoint) -> DalekPoint {
        // k = k_lo + 2^128 * k_hi, and both halves are below the group order.
        let (lo, hi) = self.split();

        let mut two_pow_128 = [0u8; ENCODED_LEN];
        two_pow_128[HALF_LEN] = 1;
        let shifted = point * Scalar::from_bytes_mod_order(two_pow_128);

        point * &*lo + shifted * &*hi
    }

    fn split(&self) -> (Zeroizing<Scalar>, Zeroizing<Scalar>) {
        let mut lo = Zeroizing::new([0u8; ENCODED_LEN]);
        let mut hi = Zeroizing::new([0u8; ENCODED_LEN]);
        lo[..HALF_LEN].copy_from_slice(&self.0[..HALF_LEN]);
        hi[..HALF_LEN].copy_from_slice(&self.0[HALF_LEN..]);

        (
            Zeroizing::new(Scalar::from_bytes_mod_order(*lo)),
            Zeroizing::new(Scalar::from_bytes_mod_order(*hi)),
        )
    }
}
