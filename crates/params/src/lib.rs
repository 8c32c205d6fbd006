//! Constant values for the krypton library
//!
//! Sizes are in bytes unless the name says `WORDS`.

#![no_std]

pub mod stream;

pub use stream::*;
