//! Internal utilities for the krypton library
//!
//! Counter lane and constant-time comparison helpers shared by the
//! key, nonce and engine types. Nothing here is part of the stable API.

#![cfg_attr(not(test), no_std)]

pub mod constant_time;
pub mod endian;
