use crate::digit::Digit;
use crate::number::BigUint;

/// Byte order for [`from_bytes`]/[`to_bytes`], matching the wire convention
/// `0 = big endian`, `1 = little endian`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

/// Packs `bytes` into digits according to `endian`. Digit `i` always reads
/// from the chunk at `bytes[i*digit_bytes .. (i+1)*digit_bytes]` — chunk
/// order is always ascending (digit 0 first) regardless of `endian`, which
/// only controls byte order *within* each chunk. Matches the original's
/// `getIntegerByte`/`bignum_from_byteArray`: the endian flag is not a
/// whole-number reversal.
///
/// Bytes beyond the capacity (`N * size_of::<D>()`) are silently dropped,
/// per this crate's documented capacity-overflow policy. A short final
/// chunk (fewer than `digit_bytes` bytes remaining) is read as a chunk of
/// just that many bytes, the same width-narrowing the original performs
/// when `len` isn't a multiple of `digit_bytes`.
pub fn from_bytes<D: Digit, const N: usize>(bytes: &[u8], endian: Endian) -> BigUint<D, N> {
    let digit_bytes = (D::BITS / 8) as usize;
    let len = bytes.len();
    let mut out = [D::ZERO; N];
    for i in 0..N {
        let offset = i * digit_bytes;
        if offset >= len {
            break;
        }
        let rem = (len - offset).min(digit_bytes);
        let chunk = &bytes[offset..offset + rem];
        let mut v: u64 = 0;
        match endian {
            Endian::Little => {
                for (k, &byte) in chunk.iter().enumerate() {
                    v |= (byte as u64) << (8 * k);
                }
            }
            Endian::Big => {
                for &byte in chunk {
                    v = (v << 8) | byte as u64;
                }
            }
        }
        out[i] = D::from_u64(v);
    }
    BigUint::from_digits(out)
}

/// Returns the minimum-length byte sequence representing `n`: digit `i`
/// always occupies chunk `i` (ascending, digit 0 first) of the output,
/// `endian` only flipping byte order *within* each digit-sized chunk —
/// matching `setIntegerByte`/`bignum_to_byteArray`, not a whole-number
/// reversal. Trims insignificant trailing zero bytes from the end of the
/// whole buffer (minimum length 1: the zero value is a single zero byte).
pub fn to_bytes<D: Digit, const N: usize>(n: &BigUint<D, N>, endian: Endian) -> Vec<u8> {
    let digit_bytes = (D::BITS / 8) as usize;
    let digit_count = n.last_index().map_or(0, |i| i + 1);
    if digit_count == 0 {
        return vec![0u8];
    }
    let mut buf = vec![0u8; digit_count * digit_bytes];
    for i in 0..digit_count {
        let v = n.digits()[i].to_u64();
        let chunk = &mut buf[i * digit_bytes..(i + 1) * digit_bytes];
        match endian {
            Endian::Little => {
                for (k, byte) in chunk.iter_mut().enumerate() {
                    *byte = ((v >> (8 * k)) & 0xFF) as u8;
                }
            }
            Endian::Big => {
                for (k, byte) in chunk.iter_mut().enumerate() {
                    *byte = ((v >> (8 * (digit_bytes - 1 - k))) & 0xFF) as u8;
                }
            }
        }
    }
    let mut count = 1;
    for (j, &byte) in buf.iter().enumerate() {
        if byte != 0 {
            count = j + 1;
        }
    }
    buf.truncate(count);
    buf
}
