//! Random access into the keystream
//!
//! When a block function is a pure function of `(key, iv, block_index)`, any
//! byte offset can be reached by computing a single block. Engines over such
//! functions gain [`seek`](KeystreamEngine::seek) and
//! [`init_at`](KeystreamEngine::init_at); engines over sequential functions
//! do not have these methods at all.

use log::trace;

use crate::error::{validate, Result};
use crate::stream::keystream::{BlockFunction, KeystreamEngine};

/// Marker for block functions whose output depends only on the block index
///
/// Implementors must set [`BlockFunction::SEEKABLE`] to `true`.
pub trait RandomAccess: BlockFunction {}

impl<F: RandomAccess> KeystreamEngine<F> {
    /// Move to absolute byte offset `position`, forwards or backwards
    pub fn seek(&mut self, position: u64) -> Result<()> {
        validate::initialized(F::NAME, self.is_initialized())?;

        trace!("{} seeking to position {}", F::NAME, position);
        self.set_position(position);
        self.refresh();
        Ok(())
    }

    /// Install `key` and `iv` and start at byte `position`
    pub fn init_at(&mut self, key: &[u8], iv: &[u8], position: u64) -> Result<()> {
        self.install(key, iv, position)
    }
}
