//! Keystream engines with secure key handling
//!
//! This crate provides the Salsa20, ChaCha20 and HC-256 stream ciphers on top
//! of a shared block-buffered engine. Salsa20 and ChaCha20 can be entered at
//! any byte offset; HC-256 is sequential only. The library is designed to be
//! usable in both `std` and `no_std` environments (an allocator is required
//! for the boxed, name-dispatched interface).
//!
//! # Security Features
//!
//! - Keys, IVs, keystream blocks and HC-256 tables are zeroized on drop
//! - Intermediate round state lives in self-wiping buffers
//! - Keys compare in constant time
//!
//! # Example
//!
//! ```
//! use krypton_algorithms::{Algorithm, ChaCha20, StreamCipher};
//!
//! let key = [0x42u8; 32];
//! let iv = [0x24u8; 8];
//!
//! let mut cipher = ChaCha20::new();
//! cipher.init(&key, &iv).unwrap();
//! let mut message = *b"attack at dawn";
//! cipher.apply_keystream(&mut message).unwrap();
//!
//! // Any engine can also be looked up by name
//! let mut engine = "ChaCha20".parse::<Algorithm>().unwrap().construct();
//! engine.init(&key, &iv).unwrap();
//! engine.apply_keystream(&mut message).unwrap();
//! assert_eq!(&message, b"attack at dawn");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Type system
pub mod types;
pub use types::{Algorithm, Key256, Nonce};

// Stream cipher implementations
pub mod stream;
pub use stream::{
    construct, ChaCha20, Hc256, KeystreamEngine, Salsa20, StreamCipher,
};
