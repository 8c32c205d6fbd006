//! Public API traits and types for the krypton library
//!
//! This crate provides the public API surface for the krypton engines: the
//! error taxonomy, the object-safe [`StreamCipher`] trait that host adapters
//! dispatch through, and the [`StreamParameters`] snapshot used to resume a
//! stream.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::StreamCipher;
pub use types::StreamParameters;

// Re-export trait modules for direct access
pub use traits::stream;
