//! ChaCha20 stream cipher implementation
//!
//! This module implements the djb ChaCha20 variant: a 64-bit nonce and a
//! 64-bit block counter occupying lanes 12 and 13, low word first. The
//! keystream is seekable to any byte offset.

use krypton_internal::endian::split_u64;
use krypton_params::{ARX_IV_WORDS, SIGMA};

use crate::stream::arx::{Arx, ArxCore};
use crate::stream::keystream::{Block, KeystreamEngine};
use crate::types::Key256;

/// ChaCha20 keystream engine
pub type ChaCha20 = KeystreamEngine<Arx<ChaCha20Core>>;

/// ChaCha20 lane layout and double round
pub struct ChaCha20Core;

impl ChaCha20Core {
    /// The ChaCha20 quarter round function
    #[inline]
    fn quarter_round(state: &mut Block, a: usize, b: usize, c: usize, d: usize) {
        state[a] = state[a].wrapping_add(state[b]);
        state[d] ^= state[a];
        state[d] = state[d].rotate_left(16);

        state[c] = state[c].wrapping_add(state[d]);
        state[b] ^= state[c];
        state[b] = state[b].rotate_left(12);

        state[a] = state[a].wrapping_add(state[b]);
        state[d] ^= state[a];
        state[d] = state[d].rotate_left(8);

        state[c] = state[c].wrapping_add(state[d]);
        state[b] ^= state[c];
        state[b] = state[b].rotate_left(7);
    }
}

impl ArxCore for ChaCha20Core {
    const NAME: &'static str = "ChaCha20";

    fn init_block(key: &Key256, iv: &[u32; ARX_IV_WORDS], block_index: u64, state: &mut Block) {
        // "expand 32-byte k" in little-endian
        state[..4].copy_from_slice(&SIGMA);
        state[4..12].copy_from_slice(key.words());

        // Counter (2 words, low first)
        (state[12], state[13]) = split_u64(block_index);

        // Nonce (2 words)
        state[14] = iv[0];
        state[15] = iv[1];
    }

    fn double_round(state: &mut Block) {
        // Column rounds
        Self::quarter_round(state, 0, 4, 8, 12);
        Self::quarter_round(state, 1, 5, 9, 13);
        Self::quarter_round(state, 2, 6, 10, 14);
        Self::quarter_round(state, 3, 7, 11, 15);

        // Diagonal rounds
        Self::quarter_round(state, 0, 5, 10, 15);
        Self::quarter_round(state, 1, 6, 11, 12);
        Self::quarter_round(state, 2, 7, 8, 13);
        Self::quarter_round(state, 3, 4, 9, 14);
    }
}
