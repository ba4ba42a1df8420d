//! Known-answer tests.

#![cfg(feature = "test-vectors")]

use ed25519_curve::{
    BigUint, Curve, Ed25519,
    test_vectors::group::{
        ADD_TEST_VECTORS, BASE_PLUS_ORDER_FOUR_POINT, MUL_TEST_VECTORS, NEUTRAL, ORDER_FOUR_POINT,
    },
};

fn to_coordinates(point: &([u8; 32], [u8; 32])) -> (BigUint, BigUint) {
    (
        BigUint::from_bytes_be(&point.0),
        BigUint::from_bytes_be(&point.1),
    )
}

#[test]
fn repeated_addition() {
    let curve = Ed25519::new();
    let params = curve.params();

    let mut p = to_coordinates(&NEUTRAL);
    for expected in ADD_TEST_VECTORS {
        p = curve.add(&p.0, &p.1, &params.gx, &params.gy).unwrap();
        assert_eq!(p, to_coordinates(expected));
    }
}

#[test]
fn repeated_doubling() {
    let curve = Ed25519::new();
    let (x, y) = to_coordinates(&ADD_TEST_VECTORS[0]);
    let (x2, y2) = curve.double(&x, &y).unwrap();
    let (x4, y4) = curve.double(&x2, &y2).unwrap();

    assert_eq!((x2, y2), to_coordinates(&ADD_TEST_VECTORS[1]));
    assert_eq!((x4, y4), to_coordinates(&ADD_TEST_VECTORS[3]));
}

#[test]
fn scalar_base_mult() {
    let curve = Ed25519::new();
    for vector in MUL_TEST_VECTORS {
        let expected = (
            BigUint::from_bytes_be(&vector.x),
            BigUint::from_bytes_be(&vector.y),
        );
        assert_eq!(curve.scalar_base_mult(vector.k).unwrap(), expected);
    }
}

#[test]
fn scalar_mult() {
    let curve = Ed25519::new();
    let params = curve.params();
    for vector in MUL_TEST_VECTORS {
        let expected = (
            BigUint::from_bytes_be(&vector.x),
            BigUint::from_bytes_be(&vector.y),
        );
        assert_eq!(
            curve.scalar_mult(&params.gx, &params.gy, vector.k).unwrap(),
            expected
        );
    }
}

#[test]
fn small_order_component() {
    let curve = Ed25519::new();
    let (x, y) = to_coordinates(&BASE_PLUS_ORDER_FOUR_POINT);
    let n = curve.params().n.to_bytes_be();

    assert!(curve.is_on_curve(&x, &y));
    assert_eq!(
        curve.scalar_mult(&x, &y, &n).unwrap(),
        to_coordinates(&ORDER_FOUR_POINT)
    );
}
