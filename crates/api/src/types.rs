//! Core types shared between the engines and their adapters

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Resumable stream state: the IV and the absolute keystream byte offset.
///
/// Together with the key this is everything needed to continue a stream on
/// another engine instance. No wire encoding is implied; with the `serde`
/// feature the type can be fed to any serde format.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StreamParameters {
    iv: Vec<u8>,
    position: u64,
}

impl StreamParameters {
    /// Parameters starting at byte `position` of the stream for `iv`
    pub fn new(iv: impl Into<Vec<u8>>, position: u64) -> Self {
        Self {
            iv: iv.into(),
            position,
        }
    }

    /// Parameters starting at the beginning of the stream
    pub fn from_iv(iv: impl Into<Vec<u8>>) -> Self {
        Self::new(iv, 0)
    }

    /// The IV bytes
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    /// The absolute byte offset into the keystream
    pub fn position(&self) -> u64 {
        self.position
    }
}
