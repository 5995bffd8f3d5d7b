//! Error type for the hashing pipeline.
//!
//! Every byte sequence, including the empty one, is a valid input, so there
//! is no user-facing error. The only variant reports a broken internal
//! invariant and should never be observed from a correct build.

/// Errors produced by the SHA-256 pipeline.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A buffer handed to the compressor was not a whole number of 64-byte
    /// blocks.
    ///
    /// `len` is the offending length in bytes.
    #[error("internal error: padded message is not aligned on a 64-byte boundary (len {len})")]
    InternalError { len: usize },
}

/// Convenience alias used across the crate.
pub type Result<T> = core::result::Result<T, Error>;
