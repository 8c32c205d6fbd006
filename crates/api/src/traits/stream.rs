//! Object-safe interface for keystream ciphers
//!
//! Adapters that look engines up by name hold them as
//! `Box<dyn StreamCipher>` and drive them through this trait. Encryption and
//! decryption are the same XOR; there is no padding and no tail handling.

use alloc::vec::Vec;

use crate::error::Result;
use crate::types::StreamParameters;

/// Common trait for keystream cipher engines
pub trait StreamCipher {
    /// Canonical algorithm name
    fn algorithm(&self) -> &'static str;

    /// Key size in bytes
    fn key_size(&self) -> usize;

    /// IV size in bytes
    fn iv_size(&self) -> usize;

    /// Keystream block size in bytes
    fn block_size(&self) -> usize;

    /// Whether the keystream can be entered at an arbitrary byte offset
    fn is_seekable(&self) -> bool;

    /// Whether a key and IV have been installed
    fn is_initialized(&self) -> bool;

    /// Install `key` and `iv` and position the stream at byte 0
    fn init(&mut self, key: &[u8], iv: &[u8]) -> Result<()> {
        self.init_at(key, iv, 0)
    }

    /// Install `key` and `iv` and position the stream at byte `position`
    fn init_at(&mut self, key: &[u8], iv: &[u8], position: u64) -> Result<()>;

    /// Install `key` and resume from a parameter snapshot
    fn init_with(&mut self, key: &[u8], params: &StreamParameters) -> Result<()> {
        self.init_at(key, params.iv(), params.position())
    }

    /// Move to absolute byte offset `position`
    fn seek(&mut self, position: u64) -> Result<()>;

    /// Rewind to byte 0 with the current key and IV
    fn reset(&mut self) -> Result<()> {
        self.seek(0)
    }

    /// XOR the keystream into `data` in place
    fn apply_keystream(&mut self, data: &mut [u8]) -> Result<()>;

    /// Encrypt data in place
    fn encrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply_keystream(data)
    }

    /// Decrypt data in place
    fn decrypt(&mut self, data: &mut [u8]) -> Result<()> {
        self.apply_keystream(data)
    }

    /// Return `input` XORed with the keystream
    fn process(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = input.to_vec();
        self.apply_keystream(&mut output)?;
        Ok(output)
    }

    /// Overwrite `output` with raw keystream bytes
    fn keystream(&mut self, output: &mut [u8]) -> Result<()> {
        output.fill(0);
        self.apply_keystream(output)
    }

    /// Current absolute byte offset into the keystream
    fn position(&self) -> u64;

    /// Copy of the IV
    fn iv(&self) -> Vec<u8>;

    /// Snapshot of the IV and position
    fn parameters(&self) -> StreamParameters {
        StreamParameters::new(self.iv(), self.position())
    }
}
