//! Common implementations and shared functionality for the krypton library
//!
//! This crate provides the secret-holding buffer types used by the key,
//! nonce and engine implementations.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer};
