use crate::digit::{fused_mac, mul_carry, Digit};
use crate::number::BigUint;

/// `a * b`, schoolbook multiply-accumulate into a fresh digit array. Unlike
/// a pointer-based implementation, accumulating into an array disjoint from
/// both `a` and `b` (rather than in place over one of them) means the outer
/// loop's iteration order has no aliasing consequences — low-to-high reads
/// as naturally here as high-to-low.
pub fn mul<D: Digit, const N: usize>(a: BigUint<D, N>, b: BigUint<D, N>) -> BigUint<D, N> {
    if a.is_zero() || b.is_zero() {
        return BigUint::zero();
    }
    if a.last_index() == Some(0) {
        return mul_small(b, a.digits()[0]);
    }
    if b.last_index() == Some(0) {
        return mul_small(a, b.digits()[0]);
    }

    let mut out = [D::ZERO; N];
    for i in 0..N {
        if a.digits()[i] == D::ZERO {
            continue;
        }
        let mut carry = D::ZERO;
        let span = N - i;
        for j in 0..span {
            let (lo, c) = fused_mac(out[i + j], a.digits()[i], b.digits()[j], carry);
            out[i + j] = lo;
            carry = c;
        }
        debug_assert!(carry == D::ZERO, "mul overflowed capacity");
    }
    BigUint::from_digits(out)
}

/// `a * scalar`.
pub fn mul_small<D: Digit, const N: usize>(a: BigUint<D, N>, scalar: D) -> BigUint<D, N> {
    let mut out = a;
    mul_small_assign(&mut out, scalar);
    out
}

/// `c *= scalar`, in place.
pub fn mul_small_assign<D: Digit, const N: usize>(c: &mut BigUint<D, N>, scalar: D) {
    if scalar == D::ZERO || c.is_zero() {
        *c = BigUint::zero();
        return;
    }
    let digits = c.digits_mut();
    let mut carry = D::ZERO;
    for d in digits.iter_mut() {
        let (lo, co) = mul_carry(*d, scalar, carry);
        *d = lo;
        carry = co;
    }
    debug_assert!(carry == D::ZERO, "mul_small overflowed capacity");
}
