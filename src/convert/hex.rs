use crate::digit::Digit;
use crate::error::{Error, Result};
use crate::number::BigUint;

/// Parses a big-endian hex string (most significant digit first, as a human
/// reads a number) into a value. Unlike [`crate::convert::bytes`], digit
/// order here *is* reversed by string position — `bignum_from_hex_string`
/// reads the string's last `2 * size_of::<D>()` characters as digit 0, the
/// chunk before that as digit 1, and so on, matching how the whole number is
/// conventionally written out. The string length must be a multiple of
/// `2 * size_of::<D>()` — a digit's worth of hex characters at a time;
/// unlike the original's `require(...)` abort (an internal invariant check),
/// this is caller-supplied data, so misalignment is a reported `Error`.
/// Chunks beyond capacity `N` are silently dropped.
pub fn from_hex_str<D: Digit, const N: usize>(s: &str) -> Result<BigUint<D, N>> {
    let digit_bytes = (D::BITS / 8) as usize;
    let chunk_chars = 2 * digit_bytes;
    if s.len() % chunk_chars != 0 {
        return Err(Error::InvalidHexLength { len: s.len(), digit_bytes });
    }
    let chars: Vec<char> = s.chars().collect();
    let chunk_count = chars.len() / chunk_chars;
    let mut out = [D::ZERO; N];
    for k in 0..chunk_count.min(N) {
        let end = chars.len() - k * chunk_chars;
        let start = end - chunk_chars;
        let mut v: u64 = 0;
        for &c in &chars[start..end] {
            v = (v << 4) | c.to_digit(16).unwrap_or(0) as u64;
        }
        out[k] = D::from_u64(v);
    }
    Ok(BigUint::from_digits(out))
}

/// Renders `n` as a big-endian hex string (most significant digit first),
/// each digit zero-padded to `2 * size_of::<D>()` characters, matching
/// `bignum_to_hex_string`. Leading zero characters are then trimmed from the
/// whole string (minimum one character, i.e. `"0"` for zero) — a
/// character-granularity trim, same as the original, so the result can be
/// odd length.
pub fn to_hex_string<D: Digit, const N: usize>(n: &BigUint<D, N>) -> String {
    let digit_bytes = (D::BITS / 8) as usize;
    let width = 2 * digit_bytes;
    let last = match n.last_index() {
        Some(i) => i,
        None => return "0".to_string(),
    };
    let mut s = String::with_capacity((last + 1) * width);
    for i in (0..=last).rev() {
        s.push_str(&format!("{:0width$x}", n.digits()[i].to_u64(), width = width));
    }
    let trimmed = s.trim_start_matches('0');
    if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() }
}
