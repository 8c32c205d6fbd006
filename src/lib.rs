//! # krypton
//!
//! Keystream engines for host frameworks that dispatch cipher operations by
//! algorithm name: Salsa20 and ChaCha20 (seekable to any byte offset) and the
//! table-driven HC-256.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! krypton = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for [`api::Error`], `std` support in dependencies
//! - `serde`: `Serialize`/`Deserialize` for [`api::StreamParameters`] and [`algorithms::Algorithm`]
//! - `full`: all of the above, plus a re-export of `rand`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`krypton-api`](api): error type, `StreamCipher` trait, stream parameters
//! - [`krypton-common`](common): self-wiping secret buffers
//! - [`krypton-internal`](internal): little-endian and constant-time helpers
//! - [`krypton-params`](params): key, IV, block and table sizes
//! - [`krypton-algorithms`](algorithms): the engines

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use krypton_algorithms as algorithms;
pub use krypton_api as api;
pub use krypton_common as common;
pub use krypton_internal as internal;
pub use krypton_params as params;

// Re-export dependencies users might need
#[cfg(feature = "full")]
pub use rand;
pub use zeroize;

/// Common imports for krypton users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits and types
    pub use crate::api::{StreamCipher, StreamParameters};

    // Re-export engines and descriptors
    pub use crate::algorithms::{Algorithm, ChaCha20, Hc256, Key256, Nonce, Salsa20};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer};
}
