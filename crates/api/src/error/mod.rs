//! Error handling for the keystream engines

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};
