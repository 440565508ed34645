use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};
use core::str::FromStr;

use crate::arith;
use crate::digit::Digit;
use crate::number::BigUint;

impl<D: Digit, const N: usize> Add for BigUint<D, N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        arith::add::add(self, rhs)
    }
}

impl<D: Digit, const N: usize> AddAssign for BigUint<D, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = arith::add::add(*self, rhs);
    }
}

/// Plain unsigned subtraction; panics on underflow in debug builds, matching
/// native unsigned integer subtraction. For the sign-preserving variant, use
/// [`crate::arith::sub::sub_with_sign`] directly.
impl<D: Digit, const N: usize> Sub for BigUint<D, N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        arith::sub::sub(self, rhs)
    }
}

impl<D: Digit, const N: usize> SubAssign for BigUint<D, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = arith::sub::sub(*self, rhs);
    }
}

impl<D: Digit, const N: usize> Mul for BigUint<D, N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        arith::mul::mul(self, rhs)
    }
}

impl<D: Digit, const N: usize> MulAssign for BigUint<D, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = arith::mul::mul(*self, rhs);
    }
}

/// Panics on division by zero, matching native integer division.
impl<D: Digit, const N: usize> Div for BigUint<D, N> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        arith::div::div(self, rhs).expect("division by zero")
    }
}

impl<D: Digit, const N: usize> DivAssign for BigUint<D, N> {
    fn div_assign(&mut self, rhs: Self) {
        *self = arith::div::div(*self, rhs).expect("division by zero");
    }
}

impl<D: Digit, const N: usize> Rem for BigUint<D, N> {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        arith::div::rem(self, rhs).expect("division by zero")
    }
}

impl<D: Digit, const N: usize> RemAssign for BigUint<D, N> {
    fn rem_assign(&mut self, rhs: Self) {
        *self = arith::div::rem(*self, rhs).expect("division by zero");
    }
}

impl<D: Digit, const N: usize> BitAnd for BigUint<D, N> {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        arith::bits::and(self, rhs)
    }
}

impl<D: Digit, const N: usize> BitAndAssign for BigUint<D, N> {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = arith::bits::and(*self, rhs);
    }
}

impl<D: Digit, const N: usize> BitOr for BigUint<D, N> {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        arith::bits::or(self, rhs)
    }
}

impl<D: Digit, const N: usize> BitOrAssign for BigUint<D, N> {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = arith::bits::or(*self, rhs);
    }
}

impl<D: Digit, const N: usize> BitXor for BigUint<D, N> {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        arith::bits::xor(self, rhs)
    }
}

impl<D: Digit, const N: usize> BitXorAssign for BigUint<D, N> {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = arith::bits::xor(*self, rhs);
    }
}

impl<D: Digit, const N: usize> Shl<u32> for BigUint<D, N> {
    type Output = Self;
    fn shl(self, n: u32) -> Self {
        arith::bits::shl(self, n)
    }
}

impl<D: Digit, const N: usize> ShlAssign<u32> for BigUint<D, N> {
    fn shl_assign(&mut self, n: u32) {
        *self = arith::bits::shl(*self, n);
    }
}

impl<D: Digit, const N: usize> Shr<u32> for BigUint<D, N> {
    type Output = Self;
    fn shr(self, n: u32) -> Self {
        arith::bits::shr(self, n)
    }
}

impl<D: Digit, const N: usize> ShrAssign<u32> for BigUint<D, N> {
    fn shr_assign(&mut self, n: u32) {
        *self = arith::bits::shr(*self, n);
    }
}

impl<D: Digit, const N: usize> From<u64> for BigUint<D, N> {
    fn from(v: u64) -> Self {
        crate::convert::native::from_u64(v)
    }
}

impl<D: Digit, const N: usize> core::fmt::Display for BigUint<D, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&crate::convert::decimal::to_decimal_string(self))
    }
}

impl<D: Digit, const N: usize> FromStr for BigUint<D, N> {
    type Err = core::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(crate::convert::decimal::from_decimal_str(s))
    }
}
