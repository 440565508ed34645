//! Inherent convenience methods gathering the free functions in [`crate::arith`]
//! and [`crate::convert`] onto [`BigUint`] itself, alongside the operator
//! trait impls in [`crate::ops`].

use crate::convert::Endian;
use crate::digit::Digit;
use crate::error::Result;
use crate::number::BigUint;

impl<D: Digit, const N: usize> BigUint<D, N> {
    pub fn from_u64(v: u64) -> Self {
        crate::convert::native::from_u64(v)
    }

    pub fn to_u64(&self) -> u64 {
        crate::convert::native::to_u64(self)
    }

    pub fn from_f64(v: f64) -> Self {
        crate::convert::native::from_f64(v)
    }

    pub fn from_decimal_str(s: &str) -> Self {
        crate::convert::decimal::from_decimal_str(s)
    }

    pub fn to_decimal_string(&self) -> String {
        crate::convert::decimal::to_decimal_string(self)
    }

    pub fn write_decimal(&self, buf: &mut [u8]) -> Result<usize> {
        crate::convert::decimal::write_decimal(self, buf)
    }

    pub fn from_hex_str(s: &str) -> Result<Self> {
        crate::convert::hex::from_hex_str(s)
    }

    pub fn to_hex_string(&self) -> String {
        crate::convert::hex::to_hex_string(self)
    }

    pub fn from_bytes(bytes: &[u8], endian: Endian) -> Self {
        crate::convert::bytes::from_bytes(bytes, endian)
    }

    pub fn to_bytes(&self, endian: Endian) -> Vec<u8> {
        crate::convert::bytes::to_bytes(self, endian)
    }

    /// `c = |a - b|`, flipping `*sign` if the result is mathematically
    /// negative. See the crate-level docs for why this carries the sign by
    /// reference instead of returning a signed type.
    pub fn sub_with_sign(self, other: Self, sign: &mut i32) -> Self {
        crate::arith::sub::sub_with_sign(self, other, sign)
    }

    pub fn divmod(self, other: Self) -> Result<(Self, Self)> {
        crate::arith::div::divmod(self, other)
    }

    pub fn pow(self, exponent: Self) -> Self {
        crate::arith::pow::pow(self, exponent)
    }
}
