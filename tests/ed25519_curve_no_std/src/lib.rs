//! Builds `ed25519-curve` without `std`.

#![no_std]

use ed25519_curve::{BigUint, Curve, Ed25519, Result};

/// Computes `k * G` on a freshly constructed curve.
pub fn base_mult(k: &[u8]) -> Result<(BigUint, BigUint)> {
    Ed25519::new().scalar_base_mult(k)
}

/// Computes `k * G` on the shared curve instance.
#[cfg(feature = "critical-section")]
pub fn shared_base_mult(k: &[u8]) -> Result<(BigUint, BigUint)> {
    ed25519_curve::ed25519().scalar_base_mult(k)
}
