use crate::arith::mul::mul;
use crate::digit::Digit;
use crate::number::BigUint;

/// `a ^ b`, via repeated multiplication: the running product is multiplied
/// by `a` once per unit of `b`'s numeric value. This is linear in the *value*
/// of `b`, not its bit width — a known performance weakness, not a bug, and
/// intentionally not upgraded to exponentiation-by-squaring (see the
/// crate-level docs on preserved behaviors).
pub fn pow<D: Digit, const N: usize>(a: BigUint<D, N>, b: BigUint<D, N>) -> BigUint<D, N> {
    if b.is_zero() {
        let mut one = BigUint::zero();
        one.digits_mut()[0] = D::ONE;
        return one;
    }
    let mut result = a;
    let mut counter = b;
    counter.dec();
    while !counter.is_zero() {
        result = mul(result, a);
        counter.dec();
    }
    result
}
