//! SHA-256 core hashing functions
//!
//! This module implements the core logic of the SHA-256 cryptographic hash
//! function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 512-bit blocks
//! - a checked driver that compresses a whole padded message
//! - the complete hashing entry points for arbitrary-length input
//!
//! The padder owns and grows the message buffer; the compressor only ever
//! borrows the padded result.

use log::{error, trace};

use super::computations::{all_rounds, expand_schedule};
use super::digest::{ByteOrder, Digest};
use super::padding::pad;
use super::{BLOCK_LEN, H256_INIT};
use crate::error::{Error, Result};
use crate::primitives::be_bytes_to_u32;

/// Compresses a single 512-bit message block.
///
/// This function performs the SHA-256 compression step on a single 64-byte
/// block, updating the hash state in place.
///
/// # Parameters
/// - `block`: A 512-bit (64-byte) message block
/// - `state`: The current hash state (8 × 32-bit words)
///
/// # Notes
/// - Block words are read big-endian regardless of the host byte order.
/// - A fresh 64-word message schedule is built for every block.
pub fn compress(block: &[u8; BLOCK_LEN], state: &mut [u32; 8]) {
    compress_block(block, state);
}

/// Compresses an already padded message and returns the final hash state.
///
/// Blocks are processed strictly in order, starting from `H256_INIT`.
///
/// # Errors
/// Returns [`Error::InternalError`] if `padded` is not a whole number of
/// 64-byte blocks. Output of [`pad`] always is.
pub fn compress_padded(padded: &[u8]) -> Result<[u32; 8]> {
    if padded.len() % BLOCK_LEN != 0 {
        error!(
            "refusing to compress {} bytes: not a multiple of {BLOCK_LEN}",
            padded.len()
        );
        return Err(Error::InternalError { len: padded.len() });
    }

    let mut state = H256_INIT;

    for block in padded.chunks_exact(BLOCK_LEN) {
        compress_block(block, &mut state);
    }

    trace!("compressed {} blocks", padded.len() / BLOCK_LEN);

    Ok(state)
}

/// `block` is exactly `BLOCK_LEN` bytes at every call site.
#[inline(always)]
fn compress_block(block: &[u8], state: &mut [u32; 8]) {
    let mut w = [0u32; 64];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = be_bytes_to_u32([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    expand_schedule(&mut w);
    all_rounds(state, &w);
}

/// SHA-256 hasher configuration.
///
/// The only setting is the byte order used to serialize the final state.
/// It is fixed when the value is built and does not depend on the input.
///
/// ```
/// use sha256_core::{ByteOrder, Sha256};
///
/// let le = Sha256::new().byte_order(ByteOrder::LittleEndian);
/// let digest = le.digest(b"abc").unwrap();
///
/// assert_eq!(&digest.as_bytes()[..4], &[0xbf, 0x16, 0x78, 0xba]);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sha256 {
    order: ByteOrder,
}

impl Sha256 {
    /// Standard configuration: big-endian output.
    pub const fn new() -> Self {
        Self::with_byte_order(ByteOrder::BigEndian)
    }

    pub const fn with_byte_order(order: ByteOrder) -> Self {
        Self { order }
    }

    /// Returns a copy of this configuration using `order` for output.
    pub const fn byte_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    pub const fn order(&self) -> ByteOrder {
        self.order
    }

    /// Hashes `input`.
    ///
    /// The input is copied into an owned buffer for padding. Use
    /// [`Sha256::digest_owned`] to hand over a buffer you no longer need.
    pub fn digest(&self, input: impl AsRef<[u8]>) -> Result<Digest> {
        self.digest_owned(input.as_ref().to_vec())
    }

    /// Hashes `message`, padding it in place.
    pub fn digest_owned(&self, message: Vec<u8>) -> Result<Digest> {
        let padded = pad(message)?;
        let state = compress_padded(&padded)?;

        Ok(Digest::from_state(state, self.order))
    }
}

/// Computes the SHA-256 hash of the given input.
///
/// # Parameters
/// - `input`: Arbitrary-length input message (the empty message is valid)
///
/// # Returns
/// - The 32-byte digest, each state word serialized big-endian
///
/// # Errors
/// Only [`Error::InternalError`], which signals a defect in the padding
/// arithmetic and is never produced for any input by a correct build.
pub fn sha256(input: impl AsRef<[u8]>) -> Result<Digest> {
    Sha256::new().digest(input)
}
