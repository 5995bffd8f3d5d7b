//! Primitive helpers
//!
//! Low-level, dependency-free routines shared by the hash code.
//!
//! Everything here is defined purely in terms of shifts and masks, so the
//! results are identical on big- and little-endian hosts.

pub mod conv;

pub use conv::{be_bytes_to_u32, u32_to_be_bytes, u32_to_le_bytes, u64_to_be_bytes};
