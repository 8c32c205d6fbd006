//! Stream cipher implementations
//!
//! This module provides keystream engines: symmetric ciphers that XOR a
//! pseudorandom keystream into the data, so encryption and decryption are
//! the same operation.
//!
//! # Structure
//!
//! - [`keystream`]: the block-buffered [`KeystreamEngine`] shared by all ciphers
//! - [`seekable`]: random access for block functions that allow it
//! - [`arx`]: the common block function of the Salsa/ChaCha family
//! - [`salsa`], [`chacha`], [`hc`]: the concrete ciphers
//!
//! # Available Stream Ciphers
//!
//! - Salsa20: 64-bit IV, seekable
//! - ChaCha20: 64-bit IV, seekable
//! - HC-256: 256-bit IV, sequential only
//!
//! # Security Considerations
//!
//! Stream ciphers require a unique IV for each message encrypted under the
//! same key. Reusing an IV with the same key completely breaks the security
//! of the cipher; this is not something an engine can detect.

pub mod arx;
pub mod keystream;
pub mod seekable;

/// Salsa family of stream cipher implementations
pub mod salsa;

/// ChaCha family of stream cipher implementations
pub mod chacha;

/// HC family of stream cipher implementations
pub mod hc;

// Re-export commonly used types
pub use arx::{Arx, ArxCore};
pub use chacha::{ChaCha20, ChaCha20Core};
pub use hc::{Hc256, Hc256Core};
pub use keystream::{Block, BlockFunction, KeystreamEngine, Position};
pub use krypton_api::StreamCipher;
pub use salsa::{Salsa20, Salsa20Core};
pub use seekable::RandomAccess;

use alloc::boxed::Box;

use crate::types::Algorithm;

/// Construct a fresh, uninitialized engine for `algorithm`
pub fn construct(algorithm: Algorithm) -> Box<dyn StreamCipher> {
    algorithm.construct()
}
