use crate::digit::Digit;
use crate::number::BigUint;

/// Shift `digits` left by `shift` bits (`0 <= shift < D::BITS`), returning
/// what would have landed in a digit one position past the end of the array.
/// Used both by the public word-and-bit shift-left and, internally, by
/// division to normalize a dividend without needing an oversized buffer.
pub(crate) fn shl_bits_within<D: Digit, const N: usize>(digits: &[D; N], shift: u32) -> ([D; N], D) {
    if shift == 0 {
        return (*digits, D::ZERO);
    }
    let mut out = [D::ZERO; N];
    let mut carry = D::ZERO;
    for i in 0..N {
        let cur = digits[i];
        out[i] = cur.wrapping_shl(shift) | carry;
        carry = cur.wrapping_shr(D::BITS - shift);
    }
    (out, carry)
}

/// Shift `digits` right by `shift` bits (`0 <= shift < D::BITS`), sourcing
/// the bits that shift in at the top from `top_in` (the digit conceptually
/// one position past the end of the array).
pub(crate) fn shr_bits_within<D: Digit, const N: usize>(
    digits: &[D; N],
    top_in: D,
    shift: u32,
) -> [D; N] {
    if shift == 0 {
        return *digits;
    }
    let mut out = [D::ZERO; N];
    for i in 0..N {
        let hi = if i + 1 < N { digits[i + 1] } else { top_in };
        out[i] = digits[i].wrapping_shr(shift) | hi.wrapping_shl(D::BITS - shift);
    }
    out
}

/// `a << n`, across both whole-digit and sub-digit shift amounts. Bits
/// shifted past the capacity are dropped.
pub fn shl<D: Digit, const N: usize>(a: BigUint<D, N>, n: u32) -> BigUint<D, N> {
    let word_shift = (n / D::BITS) as usize;
    let bit_shift = n % D::BITS;
    if word_shift >= N {
        return BigUint::zero();
    }
    let mut words = [D::ZERO; N];
    for i in (0..N).rev() {
        words[i] = if i >= word_shift { a.digits()[i - word_shift] } else { D::ZERO };
    }
    let (shifted, _overflow) = shl_bits_within(&words, bit_shift);
    BigUint::from_digits(shifted)
}

/// `a >> n`.
pub fn shr<D: Digit, const N: usize>(a: BigUint<D, N>, n: u32) -> BigUint<D, N> {
    let word_shift = (n / D::BITS) as usize;
    let bit_shift = n % D::BITS;
    if word_shift >= N {
        return BigUint::zero();
    }
    let mut words = [D::ZERO; N];
    for i in 0..N {
        words[i] = if i + word_shift < N { a.digits()[i + word_shift] } else { D::ZERO };
    }
    let shifted = shr_bits_within(&words, D::ZERO, bit_shift);
    BigUint::from_digits(shifted)
}

pub fn and<D: Digit, const N: usize>(a: BigUint<D, N>, b: BigUint<D, N>) -> BigUint<D, N> {
    let mut out = [D::ZERO; N];
    for i in 0..N {
        out[i] = a.digits()[i] & b.digits()[i];
    }
    BigUint::from_digits(out)
}

pub fn or<D: Digit, const N: usize>(a: BigUint<D, N>, b: BigUint<D, N>) -> BigUint<D, N> {
    let mut out = [D::ZERO; N];
    for i in 0..N {
        out[i] = a.digits()[i] | b.digits()[i];
    }
    BigUint::from_digits(out)
}

pub fn xor<D: Digit, const N: usize>(a: BigUint<D, N>, b: BigUint<D, N>) -> BigUint<D, N> {
    let mut out = [D::ZERO; N];
    for i in 0..N {
        out[i] = a.digits()[i] ^ b.digits()[i];
    }
    BigUint::from_digits(out)
}
