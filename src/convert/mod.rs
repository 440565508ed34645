pub mod bytes;
pub mod decimal;
pub mod hex;
pub mod native;

pub use bytes::Endian;
