use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint as DalekPoint};
use subtle::{Choice, ConditionallyNegatable, ConstantTimeEq, CtOption};

use super::{AffinePoint, field::FieldElement};
use crate::{Error, Result, encoding::ENCODED_LEN};

/// Represent points on the twisted Edwards curve using extended
/// coordinates: (x, y) -> (X/Z, Y/Z, Z, T) with T = XY/Z.
/// a = -1, d = -121665/121666
#[derive(Copy, Clone, Debug)]
pub(crate) struct ExtendedPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

impl ConstantTimeEq for ExtendedPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        let XZ = self.X * other.Z;
        let ZX = self.Z * other.X;

        let YZ = self.Y * other.Z;
        let ZY = self.Z * other.Y;

        (XZ.ct_eq(&ZX)) & (YZ.ct_eq(&ZY))
    }
}

impl PartialEq for ExtendedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ExtendedPoint {}

impl ExtendedPoint {
    /// Checks that the point satisfies the projective curve equation and
    /// that `T` is consistent with `X`, `Y` and `Z`.
    pub fn is_on_curve(&self) -> Choice {
        let XY = self.X * self.Y;
        let ZT = self.Z * self.T;

        // Y^2 - X^2 == Z^2 + T^2 * D
        let YY = self.Y.square();
        let XX = self.X.square();
        let ZZ = self.Z.square();
        let TT = self.T.square();
        let lhs = YY - XX;
        let rhs = ZZ + TT * FieldElement::EDWARDS_D;

        XY.ct_eq(&ZT) & lhs.ct_eq(&rhs)
    }

    /// Convert this point to an [`AffinePoint`].
    ///
    /// Fails with [`Error::NotInvertible`] if `Z` is zero.
    pub fn to_affine(&self) -> Result<AffinePoint> {
        if bool::from(self.Z.is_zero()) {
            return Err(Error::NotInvertible);
        }

        let INV_Z = self.Z.invert();

        let x = self.X * INV_Z;
        let y = self.Y * INV_Z;

        Ok(AffinePoint { x, y })
    }

    /// Encode as `y` with the sign of `x` in the top bit.
    pub fn compress(&self) -> Result<CompressedEdwardsY> {
        let affine = self.to_affine()?;

        let mut bytes = affine.y.to_bytes();
        bytes[ENCODED_LEN - 1] |= affine.x.is_negative().unwrap_u8() << 7;
        Ok(CompressedEdwardsY(bytes))
    }

    /// Recover a point from `y` and the sign of `x`.
    pub fn decompress(compressed: &CompressedEdwardsY) -> CtOption<Self> {
        let mut y_bytes = compressed.to_bytes();
        let sign = Choice::from(y_bytes[ENCODED_LEN - 1] >> 7);
        y_bytes[ENCODED_LEN - 1] &= 0x7f;

        FieldElement::from_repr(&y_bytes).and_then(|y| {
            // x^2 = (y^2 - 1) / (d y^2 + 1)
            let yy = y.square();
            let u = yy - FieldElement::ONE;
            let v = FieldElement::EDWARDS_D * yy + FieldElement::ONE;

            let (mut x, is_valid) = FieldElement::sqrt_ratio_i(&u, &v);
            x.conditional_negate(sign);

            CtOption::new(AffinePoint { x, y }.to_extended(), is_valid)
        })
    }

    /// Convert into the `curve25519-dalek` representation.
    pub fn to_dalek(&self) -> Result<DalekPoint> {
        self.compress()?.decompress().ok_or(Error::NotOnCurve)
    }

    /// Convert from the `curve25519-dalek` representation.
    pub fn from_dalek(point: &DalekPoint) -> Result<Self> {
        Option::from(Self::decompress(&point.compress())).ok_or(Error::NotOnCurve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
    use hex_literal::hex;

    fn hex_to_field(bytes_be: [u8; 32]) -> FieldElement {
        let mut bytes = bytes_be;
        bytes.reverse();
        FieldElement::from_bytes(&bytes)
    }

    fn base_point() -> ExtendedPoint {
        AffinePoint {
            x: hex_to_field(hex!(
                "216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a"
            )),
            y: hex_to_field(hex!(
                "6666666666666666666666666666666666666666666666666666666666666658"
            )),
        }
        .to_extended()
    }

    #[test]
    fn identity_is_on_curve() {
        let identity = AffinePoint::IDENTITY.to_extended();
        assert!(bool::from(identity.is_on_curve()));
        assert_eq!(identity.T, FieldElement::ZERO);
        assert_eq!(identity.to_affine().unwrap(), AffinePoint::IDENTITY);
    }

    #[test]
    fn projective_equality() {
        let point = base_point();
        let scale = hex_to_field(hex!(
            "0000000000000000000000000000000000000000000000000000000000000007"
        ));
        let scaled = ExtendedPoint {
            X: point.X * scale,
            Y: point.Y * scale,
            Z: scale,
            T: point.T * scale,
        };

        assert!(bool::from(scaled.is_on_curve()));
        assert_eq!(scaled, point);
        assert_eq!(scaled.to_affine().unwrap(), point.to_affine().unwrap());
    }

    #[test]
    fn inconsistent_t_is_not_on_curve() {
        let point = base_point();
        let skewed = ExtendedPoint {
            T: point.T + FieldElement::ONE,
            ..point
        };
        assert!(!bool::from(skewed.is_on_curve()));
        assert!(bool::from(point.is_on_curve()));
    }

    #[test]
    fn zero_z_is_not_invertible() {
        let point = ExtendedPoint {
            Z: FieldElement::ZERO,
            ..base_point()
        };
        assert_eq!(point.to_affine(), Err(Error::NotInvertible));
    }

    #[test]
    fn base_point_matches_dalek() {
        let point = base_point();
        assert_eq!(point.to_dalek().unwrap(), ED25519_BASEPOINT_POINT);
        assert_eq!(
            ExtendedPoint::from_dalek(&ED25519_BASEPOINT_POINT).unwrap(),
            point
        );
    }

    #[test]
    fn compress_round_trip() {
        let point = base_point();
        let compressed = point.compress().unwrap();
        assert_eq!(
            compressed,
            curve25519_dalek::constants::ED25519_BASEPOINT_COMPRESSED
        );
        assert_eq!(ExtendedPoint::decompress(&compressed).unwrap(), point);
    }

    #[test]
    fn order_four_point() {
        // (sqrt(-1), 0) has order four and lies outside the prime order subgroup.
        let point = AffinePoint {
            x: FieldElement::SQRT_M1,
            y: FieldElement::ZERO,
        }
        .to_extended();
        assert!(bool::from(point.is_on_curve()));

        let dalek = point.to_dalek().unwrap();
        assert!(!dalek.is_torsion_free());
        assert_eq!(ExtendedPoint::from_dalek(&dalek).unwrap(), point);
    }
}
