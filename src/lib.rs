//! SHA-256 message digest
//!
//! This crate computes the SHA-256 hash (FIPS 180-4) of a complete,
//! in-memory byte sequence and returns the 32-byte digest.
//!
//! The focus is on **clarity, predictability, and auditability**: the
//! pipeline is split into a padder and a compressor with explicit, checked
//! hand-off between them, and every step is a plain function over plain
//! data.
//!
//! # Module overview
//!
//! - `hash`
//!   The SHA-256 pipeline itself: message padding, big-endian word
//!   assembly, message-schedule expansion, the 64-round compression
//!   function, and the `Digest` output type.
//!
//! - `primitives`
//!   Host-independent byte/word conversion routines used by the hash code.
//!   Nothing in here relies on the platform's native integer layout.
//!
//! - `error`
//!   The crate's error type. The only failure is an internal invariant
//!   violation in the padding arithmetic, which a correct build never
//!   produces.
//!
//! # Example
//!
//! ```
//! let digest = sha256_core::sha256("hello world").unwrap();
//!
//! assert_eq!(
//!     digest.to_hex(),
//!     "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
//! );
//! ```
//!
//! # Non-goals
//!
//! - Streaming or incremental hashing
//! - HMAC and keyed variants
//! - Constant-time or side-channel hardening
//! - Other SHA family members

pub mod error;
pub mod hash;
pub mod primitives;

pub use error::{Error, Result};
pub use hash::sha256;
pub use hash::sha256::{ByteOrder, Digest, Sha256};
