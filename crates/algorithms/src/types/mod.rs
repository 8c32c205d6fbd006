//! Type-safe wrappers for keys, IVs and algorithm descriptors
//!
//! This module provides the domain types the engines are built from. Keys
//! and IVs carry their size in the type and wipe themselves on drop.

pub mod algorithms;
pub mod key;
pub mod nonce;

// Re-export main types
pub use algorithms::Algorithm;
pub use key::Key256;
pub use nonce::Nonce;

// Re-export core types
pub use krypton_api::types::StreamParameters;

// Re-export security types
pub use krypton_common::security::{EphemeralSecret, SecretBuffer};
