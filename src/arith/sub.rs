use core::cmp::Ordering;

use crate::digit::{sub_borrow, Digit};
use crate::number::BigUint;

/// `c = |a - b|`, flipping `*sign` if the mathematical result is negative.
/// `sign` is the caller's external sign flag — see the crate-level docs on
/// why subtraction carries it by reference instead of returning a signed
/// type.
pub fn sub_with_sign<D: Digit, const N: usize>(
    a: BigUint<D, N>,
    b: BigUint<D, N>,
    sign: &mut i32,
) -> BigUint<D, N> {
    if b.is_zero() {
        return a;
    }
    if a.is_zero() {
        *sign = -*sign;
        return b;
    }
    match a.compare(&b) {
        Ordering::Equal => BigUint::zero(),
        Ordering::Less => {
            *sign = -*sign;
            subtract_ge(b, a)
        }
        Ordering::Greater => subtract_ge(a, b),
    }
}

/// Plain unsigned subtraction. Debug-asserts (and in release wraps, matching
/// native unsigned subtraction overflow semantics) that `a >= b`.
pub fn sub<D: Digit, const N: usize>(a: BigUint<D, N>, b: BigUint<D, N>) -> BigUint<D, N> {
    debug_assert!(a >= b, "subtraction underflow");
    let mut sign = 1i32;
    sub_with_sign(a, b, &mut sign)
}

/// `larger - smaller`, assuming `larger >= smaller`. Since digits above each
/// operand's last non-zero index are guaranteed zero, a full `N`-wide
/// borrow-subtract is correct without tracking either operand's length.
fn subtract_ge<D: Digit, const N: usize>(larger: BigUint<D, N>, smaller: BigUint<D, N>) -> BigUint<D, N> {
    let mut out = [D::ZERO; N];
    let mut borrow = false;
    for i in 0..N {
        let (d, b) = sub_borrow(larger.digits()[i], smaller.digits()[i], borrow);
        out[i] = d;
        borrow = b;
    }
    debug_assert!(!borrow, "subtract_ge called with larger < smaller");
    BigUint::from_digits(out)
}

/// `c -= scalar`, propagating borrow upward in place. Debug-asserts that `c`
/// was large enough not to underflow.
pub fn sub_small_assign<D: Digit, const N: usize>(c: &mut BigUint<D, N>, scalar: D) {
    if scalar == D::ZERO {
        return;
    }
    let digits = c.digits_mut();
    let (diff, mut borrow) = sub_borrow(digits[0], scalar, false);
    digits[0] = diff;
    let mut i = 1;
    while borrow && i < N {
        let (diff, b2) = sub_borrow(digits[i], D::ZERO, borrow);
        digits[i] = diff;
        borrow = b2;
        i += 1;
    }
    debug_assert!(!borrow, "sub_small underflowed");
}
