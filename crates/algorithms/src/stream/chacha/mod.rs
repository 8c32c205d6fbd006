//! ChaCha family of stream cipher implementations

pub mod chacha20;

pub use chacha20::{ChaCha20, ChaCha20Core};
