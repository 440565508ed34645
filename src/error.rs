use thiserror::Error;

/// Failure modes a caller can actually recover from. Capacity overflow and
/// aliasing misuse are not part of this enum — see the crate-level docs.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,

    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },

    #[error("hex string length {len} is not a multiple of {digit_bytes} bytes per digit")]
    InvalidHexLength { len: usize, digit_bytes: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
