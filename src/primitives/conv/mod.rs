//! Conversion helpers between bytes and fixed-width words.
//!
//! Split by word width, mirroring how the hash code consumes them.

pub mod u32;
pub mod u64;

pub use self::u32::{be_bytes_to_u32, u32_to_be_bytes, u32_to_le_bytes};
pub use self::u64::u64_to_be_bytes;
