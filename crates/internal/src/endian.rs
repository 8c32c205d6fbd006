//! Counter lane helpers
//!
//! Byte/word conversion goes through `byteorder`; what remains here is the
//! split of a 64-bit block counter into the two 32-bit lanes of an ARX state.

/// Split a 64-bit counter into (low, high) 32-bit lanes.
#[inline(always)]
pub const fn split_u64(value: u64) -> (u32, u32) {
    (value as u32, (value >> 32) as u32)
}
