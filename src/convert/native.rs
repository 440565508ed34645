use crate::digit::Digit;
use crate::number::BigUint;

/// Deposits `v` across digits, narrowing as needed for smaller digit widths.
pub fn from_u64<D: Digit, const N: usize>(v: u64) -> BigUint<D, N> {
    let mut out = [D::ZERO; N];
    let mut remaining = v;
    let mut i = 0;
    while remaining != 0 && i < N {
        out[i] = D::from_u64(remaining);
        remaining >>= D::BITS;
        i += 1;
    }
    BigUint::from_digits(out)
}

/// Truncates `n` into a `u64` (the widest native integer this crate targets).
pub fn to_u64<D: Digit, const N: usize>(n: &BigUint<D, N>) -> u64 {
    let count = (((64 + D::BITS - 1) / D::BITS) as usize).min(N);
    let mut result: u64 = 0;
    for i in (0..count).rev() {
        result = (result << D::BITS) | n.digits()[i].to_u64();
    }
    result
}

/// Formats `v` as a plain decimal string (rounding to the nearest integer,
/// like `%.0f`) and parses that, rather than hand-rolling binary-to-decimal
/// rounding. A negative `v` parses to zero: the leading `-` is neither a
/// digit nor `.`, so decimal parsing stops immediately, consistent with this
/// being an unsigned type with no internal sign.
pub fn from_f64<D: Digit, const N: usize>(v: f64) -> BigUint<D, N> {
    let s = format!("{:.0}", v);
    crate::convert::decimal::from_decimal_str(&s)
}
