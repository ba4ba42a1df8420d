//! Field arithmetic modulo `p = 2^255 - 19`.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, Mul, Neg, Sub};

use crypto_bigint::{
    Encoding, U256, impl_modulus,
    modular::constant_mod::{Residue, ResidueParams},
};
use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::encoding::ENCODED_LEN;

impl_modulus!(
    MODULUS,
    U256,
    "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed"
);
pub(crate) type ResidueType = Residue<MODULUS, { MODULUS::LIMBS }>;

/// Element of `GF(2^255 - 19)` in Montgomery form.
#[derive(Clone, Copy, Default)]
pub(crate) struct FieldElement(pub(crate) ResidueType);

impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({:x})", self.0.retrieve())
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(ResidueType::conditional_select(&a.0, &b.0, choice))
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for FieldElement {}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.add(&other.0))
    }
}

define_add_variants!(
    LHS = FieldElement,
    RHS = FieldElement,
    Output = FieldElement
);

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.sub(&other.0))
    }
}

define_sub_variants!(
    LHS = FieldElement,
    RHS = FieldElement,
    Output = FieldElement
);

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        FieldElement(self.0.mul(&other.0))
    }
}

define_mul_variants!(
    LHS = FieldElement,
    RHS = FieldElement,
    Output = FieldElement
);

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -*self
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        Self(self.0.neg())
    }
}

impl FieldElement {
    pub const EDWARDS_D: Self = Self(ResidueType::new(&U256::from_be_hex(
        "52036cee2b6ffe738cc740797779e89800700a4d4141d8ab75eb4dca135978a3",
    )));
    pub const MINUS_ONE: Self = Self(ResidueType::new(&U256::from_be_hex(
        "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffec",
    )));
    pub const ONE: Self = Self(ResidueType::new(&U256::ONE));
    /// Square root of `-1`, the one that is non-negative.
    pub const SQRT_M1: Self = Self(ResidueType::new(&U256::from_be_hex(
        "2b8324804fc1df0b2b4d00993dfbd7a72f431806ad2fe478c4ee1b274a0ea0b0",
    )));
    pub const ZERO: Self = Self(ResidueType::new(&U256::ZERO));

    /// Sign of the element: the low bit of its canonical encoding.
    pub fn is_negative(&self) -> Choice {
        let bytes = self.to_bytes();
        (bytes[0] & 1).into()
    }

    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Inverts a field element. Zero maps to zero.
    pub fn invert(&self) -> Self {
        const INV_EXP: U256 =
            U256::from_be_hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeb");
        Self(self.0.pow(&INV_EXP))
    }

    pub fn square(&self) -> Self {
        Self(self.0.square())
    }

    /// Canonical little-endian encoding.
    pub fn to_bytes(self) -> [u8; ENCODED_LEN] {
        self.0.retrieve().to_le_bytes()
    }

    /// Decode a little-endian integer, reducing it modulo `p`.
    pub fn from_bytes(bytes: &[u8; ENCODED_LEN]) -> Self {
        Self(ResidueType::new(&U256::from_le_slice(bytes)))
    }

    /// Decode a little-endian integer which must already be reduced
    /// modulo `p`.
    pub fn from_repr(bytes: &[u8; ENCODED_LEN]) -> CtOption<Self> {
        let element = Self::from_bytes(bytes);
        let is_canonical = element.to_bytes()[..].ct_eq(&bytes[..]);
        CtOption::new(element, is_canonical)
    }

    /// Computes `sqrt(u/v)` when it exists.
    ///
    /// Returns the non-negative root and a choice that is set when `u/v` is
    /// a square. If it is not, the returned value is `sqrt(i*u/v)`. A zero
    /// `u` always yields `(0, true)`.
    pub(crate) fn sqrt_ratio_i(u: &FieldElement, v: &FieldElement) -> (FieldElement, Choice) {
        const P_MINUS_FIVE_DIV_8: U256 =
            U256::from_be_hex("0ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffd");

        let v3 = v.square() * v;
        let v7 = v3.square() * v;
        let mut r = (u * v3) * FieldElement((u * v7).0.pow(&P_MINUS_FIVE_DIV_8));
        let check = v * r.square();

        let neg_u = -u;
        let correct_sign = check.ct_eq(u);
        let flipped_sign = check.ct_eq(&neg_u);
        let flipped_sign_i = check.ct_eq(&(neg_u * Self::SQRT_M1));

        let r_prime = Self::SQRT_M1 * r;
        r.conditional_assign(&r_prime, flipped_sign | flipped_sign_i);
        r.conditional_negate(r.is_negative());

        (r, correct_sign | flipped_sign)
    }
}
