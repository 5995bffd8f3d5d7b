//! Conversions from `u64` to bytes.

/// Writes a `u64` as eight big-endian bytes (most significant first).
///
/// Used for the message-length trailer appended during padding.
#[inline(always)]
pub const fn u64_to_be_bytes(value: u64) -> [u8; 8] {
    [
        (value >> 56) as u8,
        (value >> 48) as u8,
        (value >> 40) as u8,
        (value >> 32) as u8,
        (value >> 24) as u8,
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::u64_to_be_bytes;

    #[test]
    fn length_field_layout() {
        // 11 bytes -> 88 bits
        assert_eq!(u64_to_be_bytes(88), [0, 0, 0, 0, 0, 0, 0, 0x58]);
        assert_eq!(
            u64_to_be_bytes(0x0123_4567_89ab_cdef),
            0x0123_4567_89ab_cdefu64.to_be_bytes()
        );
    }
}
