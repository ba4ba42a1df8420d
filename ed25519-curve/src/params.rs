//! Curve parameter table.

use num_bigint::BigUint;

/// Field modulus: `p = 2^255 - 19`.
const MODULUS_HEX: &str = "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed";

/// Order of the prime-order subgroup: `ℓ = 2^252 + 27742317777372353535851937790883648493`.
const ORDER_HEX: &str = "1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed";

/// Curve constant `d = -121665/121666 mod p`, stored in the `b` slot.
const EDWARDS_D_HEX: &str = "52036cee2b6ffe738cc740797779e89800700a4d4141d8ab75eb4dca135978a3";

/// Affine x-coordinate of the base point.
const GENERATOR_X_HEX: &str = "216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a";

/// Affine y-coordinate of the base point: `4/5 mod p`.
const GENERATOR_Y_HEX: &str = "6666666666666666666666666666666666666666666666666666666666666658";

/// Parameters of an elliptic curve in affine big integer form.
///
/// The twisted Edwards addition law has no use for a Weierstrass `b`
/// coefficient, so for Ed25519 that slot carries the curve constant `d`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CurveParams {
    /// Canonical name of the curve.
    pub name: &'static str,
    /// Prime modulus of the base field.
    pub p: BigUint,
    /// Order of the base point.
    pub n: BigUint,
    /// Curve constant.
    pub b: BigUint,
    /// x-coordinate of the base point.
    pub gx: BigUint,
    /// y-coordinate of the base point.
    pub gy: BigUint,
    /// Size of the underlying field in bits.
    pub bit_size: usize,
}

impl CurveParams {
    /// Parameters of the Ed25519 curve.
    pub fn ed25519() -> Self {
        Self {
            name: "ed25519",
            p: parse_hex(MODULUS_HEX),
            n: parse_hex(ORDER_HEX),
            b: parse_hex(EDWARDS_D_HEX),
            gx: parse_hex(GENERATOR_X_HEX),
            gy: parse_hex(GENERATOR_Y_HEX),
            bit_size: 256,
        }
    }
}

fn parse_hex(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("curve constants are valid hex")
}
