//! SHA-256 message padding
//!
//! Grows a message to a whole number of 64-byte blocks:
//!
//! ```text
//! message || 0x80 || 0x00 .. 0x00 || bit_len (u64, big-endian)
//! ```
//!
//! The zero run is sized so the length field ends exactly on a block
//! boundary. When fewer than 9 bytes remain in the last block, the padding
//! rolls over into one extra block; the arithmetic handles this without a
//! special case.

use log::{error, trace};

use super::BLOCK_LEN;
use crate::error::{Error, Result};
use crate::primitives::u64_to_be_bytes;

/// Size of the big-endian bit-length trailer.
const LENGTH_FIELD_LEN: usize = 8;

/// The single byte that terminates the message: a `1` bit followed by zeros.
const TERMINATOR: u8 = 0x80;

/// Returns the padded length of a `message_len`-byte message.
///
/// This is the smallest multiple of 64 that is at least
/// `message_len + 9` (one terminator byte plus the 8-byte length field).
pub const fn padded_len(message_len: usize) -> usize {
    (message_len + 1 + LENGTH_FIELD_LEN).div_ceil(BLOCK_LEN) * BLOCK_LEN
}

/// Pads `message` in place and returns the grown buffer.
///
/// The buffer is consumed; callers that still need the original bytes must
/// clone them first.
///
/// # Errors
/// Returns [`Error::InternalError`] if the result is not aligned on a
/// 64-byte boundary. The length arithmetic does not depend on the message
/// contents, so this only fires on a defect in this function.
pub fn pad(mut message: Vec<u8>) -> Result<Vec<u8>> {
    let len = message.len();

    // Captured before the buffer grows.
    let bit_len = u64_to_be_bytes((len as u64).wrapping_mul(8));
    let total = padded_len(len);

    message.reserve_exact(total - len);
    message.push(TERMINATOR);
    message.resize(total - LENGTH_FIELD_LEN, 0);
    message.extend_from_slice(&bit_len);

    if message.len() % BLOCK_LEN != 0 {
        error!(
            "padded message is not aligned on a {BLOCK_LEN}-byte boundary: {} bytes",
            message.len()
        );
        return Err(Error::InternalError { len: message.len() });
    }

    trace!(
        "padded {len}-byte message to {} bytes ({} blocks)",
        message.len(),
        message.len() / BLOCK_LEN
    );

    Ok(message)
}
