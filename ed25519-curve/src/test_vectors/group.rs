//! Known-answer vectors for Ed25519 group arithmetic.
//!
//! Coordinates are big-endian.

use hex_literal::hex;

/// The neutral element `(0, 1)`.
pub const NEUTRAL: ([u8; 32], [u8; 32]) = (
    hex!("0000000000000000000000000000000000000000000000000000000000000000"),
    hex!("0000000000000000000000000000000000000000000000000000000000000001"),
);

/// The point `(sqrt(-1), 0)` of order four, outside the prime order subgroup.
pub const ORDER_FOUR_POINT: ([u8; 32], [u8; 32]) = (
    hex!("2b8324804fc1df0b2b4d00993dfbd7a72f431806ad2fe478c4ee1b274a0ea0b0"),
    hex!("0000000000000000000000000000000000000000000000000000000000000000"),
);

/// The base point plus [`ORDER_FOUR_POINT`].
pub const BASE_PLUS_ORDER_FOUR_POINT: ([u8; 32], [u8; 32]) = (
    hex!("6f9c1d3373017f3c22a4007a97fcac85bf68e00557598393d0be7c1f6e721a1b"),
    hex!("6a6597b61bb3c380f9e4c2a8f03b12a4a2eb3745bdac20b63381207f0acc5252"),
);

/// Repeated addition test vectors: `k * G` for `k = 1..=4`.
pub const ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a"),
        hex!("6666666666666666666666666666666666666666666666666666666666666658"),
    ),
    (
        hex!("36ab384c9f5a046c3d043b7d1833e7ac080d8e4515d7a45f83c5a14e2843ce0e"),
        hex!("2260cdf3092329c21da25ee8c9a21f5697390f51643851560e5f46ae6af8a3c9"),
    ),
    (
        hex!("67ae9c4a22928f491ff4ae743edac83a6343981981624886ac62485fd3f8e25c"),
        hex!("1267b1d177ee69aba126a18e60269ef79f16ec176724030402c3684878f5b4d4"),
    ),
    (
        hex!("203da8db56cff1468325d4b87a3520f91a739ec193ce1547493aa657c4c9f870"),
        hex!("47d0e827cb1595e1470eb88580d5716c4cf22832ea2f0ff0df38ab61ca32112f"),
    ),
];

/// Scalar multiplication test vector: `k * G = (x, y)`.
pub struct MulTestVector {
    /// Big-endian scalar.
    pub k: &'static [u8],
    /// Expected x-coordinate.
    pub x: [u8; 32],
    /// Expected y-coordinate.
    pub y: [u8; 32],
}

/// Scalar multiplication test vectors.
pub const MUL_TEST_VECTORS: &[MulTestVector] = &[
    MulTestVector {
        k: &hex!("01"),
        x: hex!("216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a"),
        y: hex!("6666666666666666666666666666666666666666666666666666666666666658"),
    },
    MulTestVector {
        k: &hex!("07"),
        x: hex!("14568685fcf4bd4ee9e3ee194b1d810783e809f3bbf1ce955855981af50e4107"),
        y: hex!("31c563e32b47d52f87ce6468dd36ad41f0882b46f7abf23d12c4c4b59f4062b8"),
    },
    MulTestVector {
        k: &hex!("0000000000000000000000000000000000000000000000000000000000000007"),
        x: hex!("14568685fcf4bd4ee9e3ee194b1d810783e809f3bbf1ce955855981af50e4107"),
        y: hex!("31c563e32b47d52f87ce6468dd36ad41f0882b46f7abf23d12c4c4b59f4062b8"),
    },
    MulTestVector {
        k: &hex!("7a2f1c3d5e6b8a9012345678abcdef0123456789abcdef0123456789abcdef01"),
        x: hex!("316368ba6f0db456a486f55d2c0a2c4229334b1ef827e8d9ceed1ccc99b1d4ee"),
        y: hex!("016d3c3dc512c3555943e5c1e6cef890a7e60d5cf545c7dfaff3763327ca70ac"),
    },
    MulTestVector {
        k: &hex!("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        x: hex!("1d7f4d471071303718be5548a1035c445547c7dbccb1825094bcfb6e6af7248d"),
        y: hex!("1c8fa66211b52666f3a53530bbc90423853a941ea2388c1b8ceb4b7a4bfe27db"),
    },
    // The group order maps to the neutral element.
    MulTestVector {
        k: &hex!("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed"),
        x: hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        y: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
    },
    MulTestVector {
        k: &hex!("1000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ee"),
        x: hex!("216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a"),
        y: hex!("6666666666666666666666666666666666666666666666666666666666666658"),
    },
    MulTestVector {
        k: &[],
        x: hex!("0000000000000000000000000000000000000000000000000000000000000000"),
        y: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
    },
];
