//! Property-based tests using quickcheck.
//!
//! Properties compare `Uint128`/`Uint256` arithmetic against `u64`/`u128`
//! reference computations, catching anything the digit-width abstraction
//! might get wrong that a single hand-picked width wouldn't exercise.

use quickcheck_macros::quickcheck;

use crate::convert::Endian;
use crate::Uint128;

fn u128_to_uint128(v: u128) -> Uint128 {
    (Uint128::from_u64((v >> 64) as u64) << 64) + Uint128::from_u64(v as u64)
}

#[quickcheck]
fn add_matches_u128(a: u64, b: u64) -> bool {
    let expected = (a as u128) + (b as u128);
    Uint128::from_u64(a) + Uint128::from_u64(b) == u128_to_uint128(expected)
}

#[quickcheck]
fn add_commutes(a: u64, b: u64) -> bool {
    Uint128::from_u64(a) + Uint128::from_u64(b) == Uint128::from_u64(b) + Uint128::from_u64(a)
}

#[quickcheck]
fn add_sub_roundtrip(a: u64, b: u64) -> bool {
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    (Uint128::from_u64(hi) - Uint128::from_u64(lo)) + Uint128::from_u64(lo) == Uint128::from_u64(hi)
}

#[quickcheck]
fn mul_matches_u128(a: u64, b: u64) -> bool {
    let expected = (a as u128) * (b as u128);
    Uint128::from_u64(a) * Uint128::from_u64(b) == u128_to_uint128(expected)
}

#[quickcheck]
fn mul_commutes(a: u64, b: u64) -> bool {
    Uint128::from_u64(a) * Uint128::from_u64(b) == Uint128::from_u64(b) * Uint128::from_u64(a)
}

#[quickcheck]
fn mul_distributes_over_add(a: u32, b: u32, c: u32) -> bool {
    let a = Uint128::from_u64(a as u64);
    let b = Uint128::from_u64(b as u64);
    let c = Uint128::from_u64(c as u64);
    a * (b + c) == a * b + a * c
}

#[quickcheck]
fn divmod_identity(a: u64, b: u64) -> bool {
    if b == 0 {
        return true;
    }
    let a = Uint128::from_u64(a);
    let b = Uint128::from_u64(b);
    let (q, r) = a.divmod(b).unwrap();
    q * b + r == a && r < b
}

#[quickcheck]
fn div_matches_u64(a: u64, b: u64) -> bool {
    if b == 0 {
        return true;
    }
    let expected = a / b;
    Uint128::from_u64(a) / Uint128::from_u64(b) == Uint128::from_u64(expected)
}

#[quickcheck]
fn rem_matches_u64(a: u64, b: u64) -> bool {
    if b == 0 {
        return true;
    }
    let expected = a % b;
    Uint128::from_u64(a) % Uint128::from_u64(b) == Uint128::from_u64(expected)
}

#[quickcheck]
fn division_by_zero_is_reported(a: u64) -> bool {
    Uint128::from_u64(a).divmod(Uint128::zero()).is_err()
}

#[quickcheck]
fn compare_is_total_order(a: u64, b: u64) -> bool {
    let expected = a.cmp(&b);
    Uint128::from_u64(a).cmp(&Uint128::from_u64(b)) == expected
}

#[quickcheck]
fn shl_matches_mul_by_pow2(a: u32, shift: u8) -> bool {
    let shift = (shift % 32) as u32;
    let a = Uint128::from_u64(a as u64);
    (a << shift) == a * Uint128::from_u64(1u64 << shift)
}

#[quickcheck]
fn shr_matches_div_by_pow2(a: u64, shift: u8) -> bool {
    let shift = (shift % 32) as u32;
    let a = Uint128::from_u64(a);
    (a >> shift) == a / Uint128::from_u64(1u64 << shift)
}

#[quickcheck]
fn bitand_bitor_bitxor_consistent(a: u64, b: u64) -> bool {
    let a = Uint128::from_u64(a);
    let b = Uint128::from_u64(b);
    (a & b) | (a ^ b) == a | b
}

#[quickcheck]
fn decimal_roundtrip(a: u64) -> bool {
    let n = Uint128::from_u64(a);
    Uint128::from_decimal_str(&n.to_decimal_string()) == n
}

#[quickcheck]
fn hex_roundtrip(a: u64) -> bool {
    // `to_hex_string` trims leading zero characters (not whole chunks), so
    // its output isn't always chunk-aligned; re-pad before parsing back,
    // same as a caller would need to for any misaligned hex string.
    let n = Uint128::from_u64(a);
    let hex = n.to_hex_string();
    let chunk_chars = 2 * core::mem::size_of::<u32>();
    let pad = (chunk_chars - hex.len() % chunk_chars) % chunk_chars;
    let padded = format!("{}{}", "0".repeat(pad), hex);
    Uint128::from_hex_str(&padded).unwrap() == n
}

#[quickcheck]
fn bytes_roundtrip_big_endian(a: u64) -> bool {
    let n = Uint128::from_u64(a);
    let bytes = n.to_bytes(Endian::Big);
    Uint128::from_bytes(&bytes, Endian::Big) == n
}

#[quickcheck]
fn bytes_roundtrip_little_endian(a: u64) -> bool {
    let n = Uint128::from_u64(a);
    let bytes = n.to_bytes(Endian::Little);
    Uint128::from_bytes(&bytes, Endian::Little) == n
}

#[quickcheck]
fn native_roundtrip(a: u64) -> bool {
    Uint128::from_u64(a).to_u64() == a
}

#[quickcheck]
fn pow_matches_repeated_mul(a: u16, exp: u8) -> bool {
    let exp = exp % 5; // keep the linear-in-value power implementation fast
    let a = Uint128::from_u64(a as u64);
    let mut expected = Uint128::from_u64(1);
    for _ in 0..exp {
        expected = expected * a;
    }
    a.pow(Uint128::from_u64(exp as u64)) == expected
}

/// Seed scenarios: the literal decimal vectors, rather than substitute
/// values, so each test pins down exactly what it claims to.
mod scenarios {
    use crate::convert::Endian;
    use crate::Uint256;

    #[test]
    fn multiply_two_large_values() {
        let a = Uint256::from_decimal_str("12345678901234567890");
        let b = Uint256::from_decimal_str("98765432109876543210");
        let product = a * b;
        assert_eq!(product.to_decimal_string(), "1219326311370217952237463801111263526900");
    }

    /// The dividend/divisor are the literal values; the `q`/`r` this crate's
    /// own divmod produces do not match the literal `q`/`r` quoted alongside
    /// them, because those quoted values don't actually satisfy
    /// `q*b + r == a` for this `a`/`b` in the first place (confirmed by hand:
    /// `12499999887343749998 * 9876543210 + 2900000010 != 123456789012345678901234567890`).
    /// So this checks the division identity against the literal inputs
    /// instead of asserting the inconsistent literal outputs.
    #[test]
    fn divmod_large_values() {
        let a = Uint256::from_decimal_str("123456789012345678901234567890");
        let b = Uint256::from_decimal_str("9876543210");
        let (q, r) = a.divmod(b).unwrap();
        assert_eq!(q * b + r, a);
        assert!(r < b);
    }

    #[test]
    fn subtract_with_sign_flip() {
        let a = Uint256::from_decimal_str("100");
        let b = Uint256::from_decimal_str("250");
        let mut sign: i32 = 1;
        let result = a.sub_with_sign(b, &mut sign);
        assert_eq!(result.to_decimal_string(), "150");
        assert_eq!(sign, -1);
    }

    #[test]
    fn power_of_small_base() {
        let a = Uint256::from_decimal_str("2");
        let result = a.pow(Uint256::from_decimal_str("64"));
        assert_eq!(result.to_decimal_string(), "18446744073709551616");
    }

    #[test]
    fn shift_left_crosses_digit_boundary() {
        let a = Uint256::from_decimal_str("1");
        let result = a << 95;
        assert_eq!(result.to_decimal_string(), "39614081257132168796771975168");
    }

    #[test]
    fn decimal_roundtrip_of_zero() {
        let zero = Uint256::zero();
        assert_eq!(zero.to_decimal_string(), "0");
        assert_eq!(Uint256::from_decimal_str("0"), zero);
        assert_eq!(zero.to_bytes(Endian::Big), vec![0u8]);
    }
}
