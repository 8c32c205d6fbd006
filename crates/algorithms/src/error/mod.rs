//! Error handling for the stream engines
//!
//! The engines share the API crate's error taxonomy; this module re-exports
//! it and adds the validation helpers every `init`/`seek` path runs before
//! mutating any state.

pub use krypton_api::error::{Error, Result};

// Include the validation submodule
pub mod validate;
