//! `BigUint` arithmetic takes its operands by value (it's `Copy`), so there
//! is no aliased-pointer hazard the way there would be with `&mut` output
//! parameters — these tests exist to document and pin that down, not to
//! guard against a real failure mode.

use fixed_bigint::Uint256;

#[test]
fn add_self_to_self() {
    let a = Uint256::from_u64(41);
    assert_eq!(a + a, Uint256::from_u64(82));
}

#[test]
fn sub_self_from_self() {
    let a = Uint256::from_u64(41);
    assert_eq!(a - a, Uint256::zero());
}

#[test]
fn mul_self_by_self() {
    let a = Uint256::from_u64(41);
    assert_eq!(a * a, Uint256::from_u64(41 * 41));
}

#[test]
fn accumulate_in_place_matches_fresh_computation() {
    let mut acc = Uint256::from_u64(7);
    let step = Uint256::from_u64(3);
    for _ in 0..5 {
        acc += step;
    }
    assert_eq!(acc, Uint256::from_u64(7 + 3 * 5));
}

#[test]
fn divmod_self_by_self() {
    let a = Uint256::from_u64(12345);
    let (q, r) = a.divmod(a).unwrap();
    assert_eq!(q, Uint256::from_u64(1));
    assert_eq!(r, Uint256::zero());
}
