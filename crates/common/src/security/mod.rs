//! Security primitives and memory safety utilities
//!
//! Foundational types that make sure secret material (keys, intermediate
//! cipher state, scratch tables) is wiped when it goes out of scope instead of
//! relying on callers to remember.

pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretBuffer};
