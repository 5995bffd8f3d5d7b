//! Conversions between 4-byte groups and `u32` words.
//!
//! These routines reassemble words with explicit shifts instead of
//! reinterpreting memory, so the byte order they implement is fixed by the
//! code and not by the host.

/// Reads four bytes as a big-endian `u32`.
///
/// `bytes[0]` becomes the most significant byte.
#[inline(always)]
pub const fn be_bytes_to_u32(bytes: [u8; 4]) -> u32 {
    ((bytes[0] as u32) << 24) | ((bytes[1] as u32) << 16) | ((bytes[2] as u32) << 8) | (bytes[3] as u32)
}

/// Writes a `u32` as four big-endian bytes (most significant first).
#[inline(always)]
pub const fn u32_to_be_bytes(value: u32) -> [u8; 4] {
    [
        (value >> 24) as u8,
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ]
}

/// Writes a `u32` as four little-endian bytes (least significant first).
#[inline(always)]
pub const fn u32_to_le_bytes(value: u32) -> [u8; 4] {
    [
        value as u8,
        (value >> 8) as u8,
        (value >> 16) as u8,
        (value >> 24) as u8,
    ]
}
