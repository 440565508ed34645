//! Fixed-capacity arbitrary-precision unsigned integer arithmetic.
//!
//! [`BigUint<D, N>`] stores `N` digits of width `D` (`u8`, `u16`, or `u32`)
//! least-significant first, with no heap allocation for the digits
//! themselves — only the string/byte-vector conversions in [`convert`]
//! allocate. Capacity is fixed at construction (`N * D::BITS` bits); there is
//! no growth, and operations that would need more digits than `N` truncate
//! silently in release builds and debug-assert in debug builds, matching how
//! native integer overflow behaves in each profile.
//!
//! ```
//! use fixed_bigint::Uint256;
//!
//! let a = Uint256::from_u64(3);
//! let b = Uint256::from_u64(4);
//! assert_eq!((a + b).to_u64(), 7);
//! ```
//!
//! See [`Uint128`], [`Uint256`], and [`Uint512`] for the common widths, or
//! name `BigUint<D, N>` directly for anything else.

pub mod api;
pub mod arith;
pub mod convert;
pub mod digit;
pub mod error;
mod number;
mod ops;
mod signed;

pub use convert::Endian;
pub use digit::Digit;
pub use error::Error;
pub use number::BigUint;
pub use signed::Int;

/// 256-bit unsigned integer built from 32-bit digits.
pub type Uint256 = BigUint<u32, 8>;
/// 128-bit unsigned integer built from 32-bit digits.
pub type Uint128 = BigUint<u32, 4>;
/// 512-bit unsigned integer built from 32-bit digits.
pub type Uint512 = BigUint<u32, 16>;

#[cfg(test)]
mod tests;
