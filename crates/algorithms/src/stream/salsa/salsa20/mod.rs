//! Salsa20/20 stream cipher
//!
//! Bernstein's Salsa20 with a 64-bit IV and a 64-bit block counter, giving a
//! keystream that can be entered at any byte offset.

use krypton_internal::endian::split_u64;
use krypton_params::{ARX_IV_WORDS, SIGMA};

use crate::stream::arx::{Arx, ArxCore};
use crate::stream::keystream::{Block, KeystreamEngine};
use crate::types::Key256;

/// Salsa20 keystream engine
pub type Salsa20 = KeystreamEngine<Arx<Salsa20Core>>;

/// Salsa20 lane layout and double round
pub struct Salsa20Core;

impl Salsa20Core {
    /// Add-rotate-xor: `x[c] ^= rotl(x[a] + x[b], n)`
    #[inline(always)]
    fn arx(x: &mut Block, a: usize, b: usize, c: usize, n: u32) {
        x[c] ^= x[a].wrapping_add(x[b]).rotate_left(n);
    }

    /// Four add-rotate-xor steps over one column or row
    #[inline(always)]
    fn quarter_round(x: &mut Block, a: usize, b: usize, c: usize, d: usize) {
        Self::arx(x, a, d, b, 7);
        Self::arx(x, b, a, c, 9);
        Self::arx(x, c, b, d, 13);
        Self::arx(x, d, c, a, 18);
    }
}

impl ArxCore for Salsa20Core {
    const NAME: &'static str = "Salsa20";

    fn init_block(key: &Key256, iv: &[u32; ARX_IV_WORDS], block_index: u64, state: &mut Block) {
        let k = key.words();

        state[0] = SIGMA[0];
        state[1..5].copy_from_slice(&k[..4]);
        state[5] = SIGMA[1];
        state[6] = iv[0];
        state[7] = iv[1];
        (state[8], state[9]) = split_u64(block_index);
        state[10] = SIGMA[2];
        state[11..15].copy_from_slice(&k[4..]);
        state[15] = SIGMA[3];
    }

    fn double_round(x: &mut Block) {
        // Columns
        Self::quarter_round(x, 0, 4, 8, 12);
        Self::quarter_round(x, 5, 9, 13, 1);
        Self::quarter_round(x, 10, 14, 2, 6);
        Self::quarter_round(x, 15, 3, 7, 11);

        // Rows
        Self::quarter_round(x, 0, 1, 2, 3);
        Self::quarter_round(x, 5, 6, 7, 4);
        Self::quarter_round(x, 10, 11, 8, 9);
        Self::quarter_round(x, 15, 12, 13, 14);
    }
}
