//! Conversions between big-endian integer encodings and the fixed-width
//! little-endian encoding used for field elements and scalars.

/// Size of a serialized field element or scalar in bytes.
pub const ENCODED_LEN: usize = 32;

/// Convert a big-endian integer encoding into a 32-byte little-endian one.
///
/// Inputs shorter than 32 bytes are treated as left-padded with zeroes.
/// Returns `None` if `input` is wider than 32 bytes.
pub fn be_to_le(input: &[u8]) -> Option<[u8; ENCODED_LEN]> {
    if input.len() > ENCODED_LEN {
        return None;
    }

    let mut out = [0u8; ENCODED_LEN];
    for (i, byte) in input.iter().enumerate() {
        out[input.len() - 1 - i] = *byte;
    }
    Some(out)
}

/// Convert a 32-byte little-endian encoding into a 32-byte big-endian one.
pub fn le_to_be(input: &[u8; ENCODED_LEN]) -> [u8; ENCODED_LEN] {
    let mut out = *input;
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn short_input_is_left_padded() {
        let le = be_to_le(&hex!("0102")).unwrap();
        assert_eq!(le[..2], [0x02, 0x01]);
        assert!(le[2..].iter().all(|&b| b == 0));

        let be = le_to_be(&le);
        assert!(be[..30].iter().all(|&b| b == 0));
        assert_eq!(be[30..], hex!("0102"));
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(be_to_le(&[]), Some([0u8; ENCODED_LEN]));
    }

    #[test]
    fn full_width_is_reversed() {
        let be = hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
        let le = be_to_le(&be).unwrap();
        assert_eq!(le[0], 0x1f);
        assert_eq!(le[31], 0x00);
        assert_eq!(le_to_be(&le), be);
    }

    #[test]
    fn wide_input_is_rejected() {
        assert_eq!(be_to_le(&[0u8; 33]), None);
    }
}
