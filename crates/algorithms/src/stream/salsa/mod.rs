//! Salsa family of stream cipher implementations

pub mod salsa20;

pub use salsa20::{Salsa20, Salsa20Core};
