use crate::arith::add::add_small_assign;
use crate::arith::mul::mul_small_assign;
use crate::digit::Digit;
use crate::error::{Error, Result};
use crate::number::BigUint;

const BASE_10_9: u64 = 1_000_000_000;

/// Parses a decimal string left to right, stopping at the first character
/// that is neither an ASCII digit nor `.` (matching the original, which
/// performs no further validation and simply stops at the fractional
/// separator). Not a `Result`-returning parse: malformed input is not an
/// error here, it is truncated input, by design.
pub fn from_decimal_str<D: Digit, const N: usize>(s: &str) -> BigUint<D, N> {
    let mut n = BigUint::zero();
    let ten = D::from_u64(10);
    for c in s.chars() {
        match c.to_digit(10) {
            Some(digit) => {
                mul_small_assign(&mut n, ten);
                add_small_assign(&mut n, D::from_u64(digit as u64));
            }
            None => break,
        }
    }
    n
}

/// Converts `n`'s digits (base `2^D::BITS`) into base-10^9 limbs,
/// least-significant limb first. A `Vec` scratch buffer (not a fixed-size
/// array) because the number of base-10^9 limbs needed depends on the
/// runtime values of the const generics `N`/`D::BITS`, which stable Rust
/// can't turn into an array length.
fn to_base_1e9<D: Digit, const N: usize>(n: &BigUint<D, N>) -> Vec<u32> {
    let mut words: Vec<u32> = Vec::new();
    if let Some(last) = n.last_index() {
        for i in (0..=last).rev() {
            let incoming = n.digits()[i].to_u64();
            // Multiply the existing base-10^9 number by 2^D::BITS and add
            // `incoming`, propagating carry through the limb chain.
            let mut add = incoming;
            let mut carry = 0u64;
            for w in words.iter_mut() {
                let v = (*w as u64) * (1u64 << D::BITS) + carry + add;
                add = 0;
                *w = (v % BASE_10_9) as u32;
                carry = v / BASE_10_9;
            }
            while carry > 0 {
                words.push((carry % BASE_10_9) as u32);
                carry /= BASE_10_9;
            }
        }
    }
    if words.is_empty() {
        words.push(0);
    }
    words
}

/// Idiomatic, always-succeeds decimal rendering, backing `Display`.
pub fn to_decimal_string<D: Digit, const N: usize>(n: &BigUint<D, N>) -> String {
    let words = to_base_1e9(n);
    let mut s = String::with_capacity(words.len() * 9);
    let top = words.len() - 1;
    s.push_str(&words[top].to_string());
    for &w in words[..top].iter().rev() {
        s.push_str(&format!("{:09}", w));
    }
    s
}

/// Writes the decimal representation into `buf`, returning the number of
/// bytes written. Fails without writing anything if `buf` is too small —
/// tightened from the original's "leave partial writes in place" behavior,
/// since the required length is trivial to compute up front here.
pub fn write_decimal<D: Digit, const N: usize>(n: &BigUint<D, N>, buf: &mut [u8]) -> Result<usize> {
    let s = to_decimal_string(n);
    if buf.len() < s.len() {
        return Err(Error::BufferTooSmall { needed: s.len(), got: buf.len() });
    }
    buf[..s.len()].copy_from_slice(s.as_bytes());
    Ok(s.len())
}
