#![no_main]
// Checks the big integer addition law against the delegated scalar
// multiplication, and that arbitrary coordinates never panic.
use ed25519_curve::{BigUint, Curve, Error, ed25519, generate_key};
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let curve = ed25519();
    let n = &curve.params().n;
    let mut rng = ChaChaRng::from_seed(data[0..32].try_into().unwrap());

    // Arbitrary coordinates: either rejected or on the curve.
    let split = 64 + usize::from(data[32] & 0x1f);
    let x = BigUint::from_bytes_be(&data[64..split]);
    let y = BigUint::from_bytes_be(&data[split..]);
    match curve.scalar_mult(&x, &y, &data[33..64]) {
        Ok((rx, ry)) => {
            assert!(curve.is_on_curve(&x, &y));
            assert!(curve.is_on_curve(&rx, &ry));
        }
        Err(Error::NotOnCurve) => assert!(!curve.is_on_curve(&x, &y)),
        Err(Error::CoordinateRange) => {
            assert!(&x >= &curve.params().p || &y >= &curve.params().p)
        }
        Err(err) => panic!("unexpected error: {err}"),
    }

    let (a, ax, ay) = generate_key(curve, &mut rng).unwrap();
    let k = &data[32..64];
    let (kx, ky) = curve.scalar_base_mult(k).unwrap();

    // a·(k·G) == k·(a·G)
    assert_eq!(
        curve.scalar_mult(&kx, &ky, &a).unwrap(),
        curve.scalar_mult(&ax, &ay, k).unwrap()
    );

    // a·G + k·G == (a + k)·G
    let sum = (BigUint::from_bytes_be(&a) + BigUint::from_bytes_be(k)) % n;
    if let Ok(point) = curve.add(&ax, &ay, &kx, &ky) {
        assert_eq!(point, curve.scalar_base_mult(&sum.to_bytes_be()).unwrap());
    }

    // 2·(a·G)
    if let Ok(point) = curve.double(&ax, &ay) {
        assert_eq!(point, curve.scalar_mult(&ax, &ay, &[2]).unwrap());
    }
});
