//! Block-buffered keystream engine
//!
//! [`KeystreamEngine`] owns the key, the IV and the most recent keystream
//! block, and XORs that block into caller data one byte at a time. Producing
//! blocks is delegated to a [`BlockFunction`]; the engine only tracks where
//! in the stream it is and when the next block is due.
//!
//! The block offset is always strictly less than [`BLOCK_SIZE`]: the moment a
//! call consumes the last byte of a block, the next block is computed, so a
//! call that ends exactly on a boundary leaves a fresh block behind.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use krypton_api::StreamCipher;
use krypton_params::{BLOCK_SIZE, BLOCK_WORDS, KEY_SIZE};

use crate::error::{validate, Result};
use crate::types::Key256;

/// One keystream block as 16 little-endian words
pub type Block = [u32; BLOCK_WORDS];

/// A keystream block generator
///
/// Implementations hold whatever per-key state they need (none for the ARX
/// ciphers, the P and Q tables for HC-256) and fill one block per call.
pub trait BlockFunction: Default + Zeroize {
    /// Canonical algorithm name
    const NAME: &'static str;

    /// IV size in bytes
    const IV_SIZE: usize;

    /// Whether `generate` is a pure function of the block index
    const SEEKABLE: bool;

    /// Fixed-size IV storage
    type Iv: AsRef<[u8]> + AsMut<[u8]> + Default + Clone + Zeroize;

    /// Derive per-key state; called on every (re)initialization from byte 0
    fn rekey(&mut self, _key: &Key256, _iv: &Self::Iv) {}

    /// Write block `block_index` of the keystream into `block`
    fn generate(&mut self, key: &Key256, iv: &Self::Iv, block_index: u64, block: &mut Block);
}

/// Largest block index; positions are taken modulo 2^64 bytes
const BLOCK_INDEX_MASK: u64 = u64::MAX / BLOCK_SIZE as u64;

/// Absolute keystream position split into block index and byte offset
///
/// The block index never exceeds 2^58 - 1, so every position is a
/// valid 64-bit byte offset and the stream wraps to byte 0 after byte 2^64 - 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct Position {
    /// Index of the current block
    pub block_index: u64,
    /// Byte offset inside the current block, always below [`BLOCK_SIZE`]
    pub block_offset: usize,
}

impl Position {
    /// Split an absolute byte offset
    pub const fn from_bytes(position: u64) -> Self {
        Self {
            block_index: position / BLOCK_SIZE as u64,
            block_offset: (position % BLOCK_SIZE as u64) as usize,
        }
    }

    /// Recombine into an absolute byte offset
    pub const fn to_bytes(self) -> u64 {
        self.block_index
            .wrapping_mul(BLOCK_SIZE as u64)
            .wrapping_add(self.block_offset as u64)
    }
}

/// Generic keystream engine over a block function
pub struct KeystreamEngine<F: BlockFunction> {
    function: F,
    key: Option<Key256>,
    iv: F::Iv,
    block: Block,
    position: Position,
}

impl<F: BlockFunction> KeystreamEngine<F> {
    /// Create an engine with no key installed
    pub fn new() -> Self {
        Self {
            function: F::default(),
            key: None,
            iv: F::Iv::default(),
            block: [0u32; BLOCK_WORDS],
            position: Position::default(),
        }
    }

    /// Install `key` and `iv` and compute block 0
    ///
    /// Both lengths are checked before anything is written, so a failed call
    /// leaves a previously initialized engine untouched.
    pub fn init(&mut self, key: &[u8], iv: &[u8]) -> Result<()> {
        self.install(key, iv, 0)
    }

    /// Install an already typed key and IV
    pub fn init_with_key(&mut self, key: Key256, iv: F::Iv) {
        self.install_typed(key, iv, 0);
    }

    /// Install `key` with a freshly drawn IV; read it back with [`Self::iv`]
    pub fn init_with_random_iv<R: RngCore + CryptoRng>(
        &mut self,
        key: &[u8],
        rng: &mut R,
    ) -> Result<()> {
        let key = Key256::from_slice(key)?;
        let mut iv = F::Iv::default();
        rng.fill_bytes(iv.as_mut());
        self.install_typed(key, iv, 0);
        Ok(())
    }

    /// XOR the keystream into `data` in place
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        validate::initialized(F::NAME, self.is_initialized())?;

        for byte in data.iter_mut() {
            let offset = self.position.block_offset;
            *byte ^= (self.block[offset / 4] >> ((offset % 4) * 8)) as u8;

            if offset + 1 == BLOCK_SIZE {
                self.position.block_index =
                    self.position.block_index.wrapping_add(1) & BLOCK_INDEX_MASK;
                self.position.block_offset = 0;
                self.refresh();
            } else {
                self.position.block_offset = offset + 1;
            }
        }

        Ok(())
    }

    /// Rewind to byte 0 with the same key and IV
    ///
    /// For table-driven ciphers this repeats the full key setup.
    pub fn reset(&mut self) -> Result<()> {
        validate::initialized(F::NAME, self.is_initialized())?;
        self.restart(0);
        Ok(())
    }

    /// Current absolute byte offset
    pub fn position(&self) -> u64 {
        self.position.to_bytes()
    }

    /// Copy of the IV
    pub fn iv(&self) -> F::Iv {
        self.iv.clone()
    }

    /// Whether a key has been installed
    pub fn is_initialized(&self) -> bool {
        self.key.is_some()
    }

    /// Validate then install; the only path from byte slices into the engine
    pub(crate) fn install(&mut self, key: &[u8], iv: &[u8], position: u64) -> Result<()> {
        validate::iv_length(F::NAME, iv.len(), F::IV_SIZE)?;
        let key = Key256::from_slice(key)?;

        let mut typed_iv = F::Iv::default();
        typed_iv.as_mut().copy_from_slice(iv);

        self.install_typed(key, typed_iv, position);
        Ok(())
    }

    fn install_typed(&mut self, key: Key256, iv: F::Iv, position: u64) {
        self.key = Some(key);
        self.iv = iv;
        self.restart(position);
        debug!("{} initialized at position {}", F::NAME, position);
    }

    /// Re-derive per-key state and move to `position`
    pub(crate) fn restart(&mut self, position: u64) {
        if let Some(key) = &self.key {
            self.function.rekey(key, &self.iv);
        }
        self.position = Position::from_bytes(position);
        self.refresh();
    }

    /// Recompute the block at the current block index
    pub(crate) fn refresh(&mut self) {
        if let Some(key) = &self.key {
            trace!("{} computing block {}", F::NAME, self.position.block_index);
            self.function
                .generate(key, &self.iv, self.position.block_index, &mut self.block);
        }
    }

    pub(crate) fn set_position(&mut self, position: u64) {
        self.position = Position::from_bytes(position);
    }
}

impl<F: BlockFunction> Default for KeystreamEngine<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: BlockFunction> Zeroize for KeystreamEngine<F> {
    fn zeroize(&mut self) {
        self.function.zeroize();
        self.key.zeroize();
        self.iv.zeroize();
        self.block.zeroize();
        self.position.zeroize();
    }
}

impl<F: BlockFunction> Drop for KeystreamEngine<F> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<F: BlockFunction> ZeroizeOnDrop for KeystreamEngine<F> {}

impl<F: BlockFunction> StreamCipher for KeystreamEngine<F> {
    fn algorithm(&self) -> &'static str {
        F::NAME
    }

    fn key_size(&self) -> usize {
        KEY_SIZE
    }

    fn iv_size(&self) -> usize {
        F::IV_SIZE
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn is_seekable(&self) -> bool {
        F::SEEKABLE
    }

    fn is_initialized(&self) -> bool {
        self.key.is_some()
    }

    fn init_at(&mut self, key: &[u8], iv: &[u8], position: u64) -> Result<()> {
        if let Err(e) = validate::seekable(F::NAME, F::SEEKABLE, position) {
            debug!("{} rejected initialization at position {}", F::NAME, position);
            return Err(e);
        }
        self.install(key, iv, position)
    }

    fn seek(&mut self, position: u64) -> Result<()> {
        if let Err(e) = validate::seekable(F::NAME, F::SEEKABLE, position) {
            debug!("{} rejected seek to position {}", F::NAME, position);
            return Err(e);
        }
        validate::initialized(F::NAME, self.key.is_some())?;

        trace!("{} seeking to position {}", F::NAME, position);
        if F::SEEKABLE {
            self.set_position(position);
            self.refresh();
        } else {
            self.restart(0);
        }
        Ok(())
    }

    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()> {
        KeystreamEngine::apply_keystream(self, data)
    }

    fn position(&self) -> u64 {
        self.position.to_bytes()
    }

    fn iv(&self) -> Vec<u8> {
        self.iv.as_ref().to_vec()
    }
}
