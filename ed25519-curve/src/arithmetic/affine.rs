use num_bigint::BigUint;
use subtle::{Choice, ConstantTimeEq};

use super::{ExtendedPoint, field::FieldElement};
use crate::{
    Error, Result,
    encoding::{be_to_le, le_to_be},
};

/// Affine point on the twisted Edwards curve
#[derive(Copy, Clone, Debug)]
pub(crate) struct AffinePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

impl AffinePoint {
    /// The identity point
    pub const IDENTITY: AffinePoint = AffinePoint {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
    };

    /// Decode big integer coordinates.
    ///
    /// Each coordinate must fit in 32 bytes and be reduced modulo `p`.
    pub fn from_coordinates(x: &BigUint, y: &BigUint) -> Result<Self> {
        Ok(Self {
            x: coordinate_to_field(x)?,
            y: coordinate_to_field(y)?,
        })
    }

    /// Encode as big integer coordinates.
    pub fn to_coordinates(&self) -> (BigUint, BigUint) {
        (field_to_coordinate(&self.x), field_to_coordinate(&self.y))
    }

    /// Checks `-x² + y² = 1 + d·x²·y²`.
    pub fn is_on_curve(&self) -> Choice {
        let xx = self.x.square();
        let yy = self.y.square();

        let lhs = FieldElement::MINUS_ONE * xx + yy;
        let rhs = FieldElement::ONE + FieldElement::EDWARDS_D * xx * yy;

        lhs.ct_eq(&rhs)
    }

    /// Convert to extended coordinates with `Z = 1`.
    pub fn to_extended(&self) -> ExtendedPoint {
        ExtendedPoint {
            X: self.x,
            Y: self.y,
            Z: FieldElement::ONE,
            T: self.x * self.y,
        }
    }
}

fn coordinate_to_field(coordinate: &BigUint) -> Result<FieldElement> {
    let bytes = be_to_le(&coordinate.to_bytes_be()).ok_or(Error::CoordinateRange)?;
    Option::from(FieldElement::from_repr(&bytes)).ok_or(Error::CoordinateRange)
}

fn field_to_coordinate(element: &FieldElement) -> BigUint {
    BigUint::from_bytes_be(&le_to_be(&element.to_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use num_traits::{One, Zero};

    const GX: [u8; 32] = hex!("216936d3cd6e53fec0a4e231fdd6dc5c692cc7609525a7b2c9562d608f25d51a");
    const GY: [u8; 32] = hex!("6666666666666666666666666666666666666666666666666666666666666658");

    #[test]
    fn identity_from_coordinates() {
        let identity = AffinePoint::from_coordinates(&BigUint::zero(), &BigUint::one()).unwrap();
        assert_eq!(identity, AffinePoint::IDENTITY);
        assert!(bool::from(identity.is_on_curve()));
    }

    #[test]
    fn coordinates_round_trip() {
        let gx = BigUint::from_bytes_be(&GX);
        let gy = BigUint::from_bytes_be(&GY);

        let point = AffinePoint::from_coordinates(&gx, &gy).unwrap();
        assert!(bool::from(point.is_on_curve()));
        assert_eq!(point.to_coordinates(), (gx, gy));
    }

    #[test]
    fn extended_round_trip() {
        let gx = BigUint::from_bytes_be(&GX);
        let gy = BigUint::from_bytes_be(&GY);

        let point = AffinePoint::from_coordinates(&gx, &gy).unwrap();
        let extended = point.to_extended();
        assert!(bool::from(extended.is_on_curve()));
        assert_eq!(extended.to_affine().unwrap(), point);
    }

    #[test]
    fn reject_unreduced() {
        let p = BigUint::from_bytes_be(&hex!(
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed"
        ));
        assert_eq!(
            AffinePoint::from_coordinates(&BigUint::zero(), &p),
            Err(Error::CoordinateRange)
        );
        assert_eq!(
            AffinePoint::from_coordinates(&(BigUint::one() << 256u32), &BigUint::one()),
            Err(Error::CoordinateRange)
        );
    }

    #[test]
    fn off_curve() {
        let point =
            AffinePoint::from_coordinates(&BigUint::one(), &BigUint::one()).unwrap();
        assert!(!bool::from(point.is_on_curve()));
    }
}
