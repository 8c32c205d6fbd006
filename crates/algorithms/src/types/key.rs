//! 256-bit stream cipher keys
//!
//! Every engine in this crate takes the same key: 32 bytes, held internally
//! as 8 little-endian words. A key is owned by exactly one engine and is
//! wiped when that engine (or the key value) is dropped.

use core::fmt;
use byteorder::{ByteOrder, LittleEndian};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use krypton_common::security::SecretBuffer;
use krypton_internal::constant_time::ct_eq_words;
use krypton_params::{KEY_SIZE, KEY_WORDS};

use crate::error::{validate, Result};

/// A 256-bit key as 8 little-endian 32-bit words
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Key256 {
    words: [u32; KEY_WORDS],
}

impl Key256 {
    /// Create a key from its word representation
    pub fn from_words(words: [u32; KEY_WORDS]) -> Self {
        Self { words }
    }

    /// Create a key from exactly 32 bytes
    pub fn from_bytes(bytes: &[u8; KEY_SIZE]) -> Self {
        let mut words = [0u32; KEY_WORDS];
        LittleEndian::read_u32_into(bytes, &mut words);
        Self { words }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::key_length(bytes.len())?;

        let mut words = [0u32; KEY_WORDS];
        LittleEndian::read_u32_into(bytes, &mut words);
        Ok(Self { words })
    }

    /// Generate a random key
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = SecretBuffer::<KEY_SIZE>::zeroed();
        rng.fill_bytes(bytes.as_mut_slice());

        let mut words = [0u32; KEY_WORDS];
        LittleEndian::read_u32_into(bytes.as_slice(), &mut words);
        Self { words }
    }

    /// The key words, least significant byte first
    pub fn words(&self) -> &[u32; KEY_WORDS] {
        &self.words
    }

    /// The raw key encoding: each word written out little-endian
    pub fn to_bytes(&self) -> SecretBuffer<KEY_SIZE> {
        let mut out = SecretBuffer::<KEY_SIZE>::zeroed();
        LittleEndian::write_u32_into(&self.words, out.as_mut_slice());
        out
    }

    /// Get the key size in bytes
    pub fn size() -> usize {
        KEY_SIZE
    }
}

impl PartialEq for Key256 {
    fn eq(&self, other: &Self) -> bool {
        ct_eq_words(&self.words, &other.words)
    }
}

impl Eq for Key256 {}

impl fmt::Debug for Key256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key256([REDACTED])")
    }
}
