//! SHA-256 digest value and output byte order.
//!
//! A [`Digest`] is the 32-byte serialization of the final hash state. The
//! standard (and default) serialization writes each state word big-endian;
//! [`ByteOrder::LittleEndian`] writes each word least significant byte
//! first instead. Hex rendering is always lowercase, two digits per byte,
//! with no separator.

use std::fmt::{self, Display, Formatter, LowerHex, UpperHex};

use super::DIGEST_LEN;
use crate::primitives::{u32_to_be_bytes, u32_to_le_bytes};

/// Byte order used when serializing the eight state words into a digest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte of each word first (FIPS 180-4).
    #[default]
    BigEndian,
    /// Least significant byte of each word first.
    LittleEndian,
}

impl ByteOrder {
    /// Maps a `big_endian_output` flag onto a byte order.
    pub const fn from_big_endian(big_endian: bool) -> Self {
        if big_endian {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }
}

/// A 32-byte SHA-256 digest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub(crate) [u8; DIGEST_LEN]);

impl Digest {
    /// Serializes a final hash state.
    pub fn from_state(state: [u32; 8], order: ByteOrder) -> Self {
        let mut out = [0u8; DIGEST_LEN];

        for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
            let bytes = match order {
                ByteOrder::BigEndian => u32_to_be_bytes(word),
                ByteOrder::LittleEndian => u32_to_le_bytes(word),
            };
            chunk.copy_from_slice(&bytes);
        }

        Digest(out)
    }

    /// Returns the digest bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Consumes the digest and returns its bytes.
    pub const fn to_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Renders the digest as 64 lowercase hex characters.
    pub fn to_hex(&self) -> String {
        format!("{self:x}")
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl UpperHex for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}
