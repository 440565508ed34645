use crate::digit::{add_carry, Digit};
use crate::number::BigUint;

/// `c = a + b`. `BigUint` is `Copy`, so `a` and `b` are independent snapshots
/// by the time this runs — there is no aliasing hazard to special-case the
/// way a pointer-based implementation would need to.
pub fn add<D: Digit, const N: usize>(a: BigUint<D, N>, b: BigUint<D, N>) -> BigUint<D, N> {
    if a.is_zero() {
        return b;
    }
    if b.is_zero() {
        return a;
    }
    if a.last_index() == Some(0) {
        return add_small(b, a.digits()[0]);
    }
    if b.last_index() == Some(0) {
        return add_small(a, b.digits()[0]);
    }

    let hi = a.last_index().unwrap().max(b.last_index().unwrap());
    let mut out = [D::ZERO; N];
    let mut carry = false;
    for i in 0..=hi {
        let (sum, c) = add_carry(a.digits()[i], b.digits()[i], carry);
        out[i] = sum;
        carry = c;
    }
    if carry {
        debug_assert!(hi + 1 < N, "add overflowed capacity");
        if hi + 1 < N {
            out[hi + 1] = D::ONE;
        }
    }
    BigUint::from_digits(out)
}

/// `a + scalar`, returned as a new value.
pub fn add_small<D: Digit, const N: usize>(a: BigUint<D, N>, scalar: D) -> BigUint<D, N> {
    let mut out = a;
    add_small_assign(&mut out, scalar);
    out
}

/// `c += scalar`, propagating carry upward in place.
pub fn add_small_assign<D: Digit, const N: usize>(c: &mut BigUint<D, N>, scalar: D) {
    if scalar == D::ZERO {
        return;
    }
    let digits = c.digits_mut();
    let (sum, mut carry) = add_carry(digits[0], scalar, false);
    digits[0] = sum;
    let mut i = 1;
    while carry && i < N {
        let (sum, c2) = add_carry(digits[i], D::ZERO, carry);
        digits[i] = sum;
        carry = c2;
        i += 1;
    }
    debug_assert!(!carry, "add_small overflowed capacity");
}
