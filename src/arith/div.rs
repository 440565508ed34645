use crate::arith::bits::{shl_bits_within, shr_bits_within};
use crate::digit::{add_carry, sub_borrow, Digit};
use crate::error::{Error, Result};
use crate::number::BigUint;

/// `a / scalar`, returning `(quotient, remainder)`. Classical high-to-low
/// short division with a running double-width remainder.
pub fn divmod_small<D: Digit, const N: usize>(a: BigUint<D, N>, scalar: D) -> (BigUint<D, N>, D) {
    debug_assert!(scalar != D::ZERO);
    if scalar == D::ONE {
        return (a, D::ZERO);
    }
    let mut out = [D::ZERO; N];
    let mut rem = D::ZERO;
    for i in (0..N).rev() {
        let num = D::make_double(rem, a.digits()[i]);
        let (q, r) = D::double_div_rem(num, scalar.widen());
        out[i] = D::narrow(q);
        rem = D::narrow(r);
    }
    (BigUint::from_digits(out), rem)
}

/// Knuth Algorithm D: `a / b`, `a % b`, for a divisor with more than one
/// significant digit. Assumes `a >= b` and `b` has at least two significant
/// digits (single-digit divisors go through [`divmod_small`]).
///
/// The dividend is normalized (shifted left so the divisor's top bit is set)
/// without allocating an oversized buffer: the one extra digit of headroom
/// normalization can need lives in a plain local variable (`rem_top`)
/// alongside the `N`-digit working array, rather than in an `N+1`-digit
/// array, since const generics can't express "N+1" on stable Rust.
fn long_divide<D: Digit, const N: usize>(
    a: BigUint<D, N>,
    b: BigUint<D, N>,
) -> (BigUint<D, N>, BigUint<D, N>) {
    let a_last = a.last_index().expect("dividend must be non-zero");
    let b_last = b.last_index().expect("divisor must be non-zero");
    debug_assert!(b_last >= 1, "long_divide requires a multi-digit divisor");

    let shift = b.digits()[b_last].leading_zeros();
    let (v, _) = shl_bits_within(b.digits(), shift);
    let (mut rem, mut rem_top) = shl_bits_within(a.digits(), shift);

    let n = b_last + 1;
    let ext_idx = a_last + 1;
    let m = ext_idx - n;

    // `shl_bits_within` already propagates shifted-out bits digit by digit,
    // so any position below `N` is correct in the physical array; only
    // position `N` itself (reachable only when the dividend uses the full
    // capacity, i.e. `ext_idx == N`) has no array slot and must fall back to
    // the carry-out `rem_top`.
    let get = |rem: &[D; N], rem_top: D, idx: usize| -> D {
        if idx == N { rem_top } else { rem[idx] }
    };
    let set = |rem: &mut [D; N], rem_top: &mut D, idx: usize, val: D| {
        if idx == N { *rem_top = val } else { rem[idx] = val }
    };

    let base = D::make_double(D::ONE, D::ZERO);
    let denom_top = v[n - 1];
    let denom_next = v[n - 2];

    let mut quo = [D::ZERO; N];

    for j in (0..=m).rev() {
        let top = get(&rem, rem_top, j + n);
        let next = get(&rem, rem_top, j + n - 1);
        let numerator = D::make_double(top, next);

        let (mut qhat, mut rhat) = D::double_div_rem(numerator, denom_top.widen());

        for _ in 0..2 {
            let exceeds = qhat >= base;
            let next2 = if j + n >= 2 { get(&rem, rem_top, j + n - 2) } else { D::ZERO };
            let lhs = D::double_mul_wide(qhat, denom_next.widen());
            let rhs = D::double_add(D::double_mul_wide(rhat, base), next2.widen());
            if exceeds || lhs > rhs {
                qhat = D::double_sub(qhat, D::ONE.widen());
                rhat = D::double_add(rhat, denom_top.widen());
                if rhat >= base {
                    break;
                }
            } else {
                break;
            }
        }
        debug_assert!(qhat < base, "quotient digit estimate failed to converge");
        let mut qhat_digit = D::narrow(qhat);

        // Multiply-subtract qhat * v[0..n] from rem[j..=j+n].
        let mut mul_carry = D::ZERO;
        let mut borrow = false;
        for k in 0..n {
            let prod = D::double_add(D::double_mul(qhat_digit, v[k]), mul_carry.widen());
            let prod_lo = D::narrow(prod);
            mul_carry = D::widen_high(prod);
            let cur = get(&rem, rem_top, j + k);
            let (diff, bout) = sub_borrow(cur, prod_lo, borrow);
            set(&mut rem, &mut rem_top, j + k, diff);
            borrow = bout;
        }
        let top_cur = get(&rem, rem_top, j + n);
        let (top_diff, top_borrow) = sub_borrow(top_cur, mul_carry, borrow);
        set(&mut rem, &mut rem_top, j + n, top_diff);

        if top_borrow {
            // Trial quotient was one too large: add the divisor back.
            qhat_digit = qhat_digit.overflowing_sub(D::ONE).0;
            let mut carry = false;
            for k in 0..n {
                let cur = get(&rem, rem_top, j + k);
                let (sum, c) = add_carry(cur, v[k], carry);
                set(&mut rem, &mut rem_top, j + k, sum);
                carry = c;
            }
            let top_cur = get(&rem, rem_top, j + n);
            let (sum, _c) = add_carry(top_cur, D::ZERO, carry);
            set(&mut rem, &mut rem_top, j + n, sum);
        }

        quo[j] = qhat_digit;
    }

    let remainder_digits = shr_bits_within(&rem, rem_top, shift);
    let mut rem_out = [D::ZERO; N];
    rem_out[..n].copy_from_slice(&remainder_digits[..n]);

    (BigUint::from_digits(quo), BigUint::from_digits(rem_out))
}

/// `(a / b, a % b)`.
pub fn divmod<D: Digit, const N: usize>(
    a: BigUint<D, N>,
    b: BigUint<D, N>,
) -> Result<(BigUint<D, N>, BigUint<D, N>)> {
    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }
    if a.compare(&b).is_lt() {
        return Ok((BigUint::zero(), a));
    }
    if let Some(0) = b.last_index() {
        let scalar = b.digits()[0];
        let (q, r) = divmod_small(a, scalar);
        let mut rem_digits = [D::ZERO; N];
        rem_digits[0] = r;
        return Ok((q, BigUint::from_digits(rem_digits)));
    }
    Ok(long_divide(a, b))
}

pub fn div<D: Digit, const N: usize>(a: BigUint<D, N>, b: BigUint<D, N>) -> Result<BigUint<D, N>> {
    divmod(a, b).map(|(q, _)| q)
}

pub fn rem<D: Digit, const N: usize>(a: BigUint<D, N>, b: BigUint<D, N>) -> Result<BigUint<D, N>> {
    divmod(a, b).map(|(_, r)| r)
}
