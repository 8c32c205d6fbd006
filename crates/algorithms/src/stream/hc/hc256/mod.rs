//! HC-256 stream cipher
//!
//! HC-256 keeps two secret tables of 1024 words, P and Q, and updates one
//! table entry per output word. Output alternates between 1024 words drawn
//! from P and 1024 drawn from Q. Because each word depends on every table
//! update before it, the keystream can only be produced in order: an
//! [`Hc256`] engine has no `seek`, and seeking through the [`StreamCipher`]
//! interface to any position other than 0 fails with
//! [`Error::UnsupportedSeek`](crate::error::Error::UnsupportedSeek).
//!
//! Key setup expands the key and IV into 2660 words, seeds the tables from
//! that expansion, and then runs the cipher for 4096 steps, discarding the
//! output.
//!
//! [`StreamCipher`]: krypton_api::StreamCipher

use byteorder::{ByteOrder, LittleEndian};
use log::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use krypton_common::security::EphemeralSecret;
use krypton_params::{
    HC256_INIT_WORDS, HC256_IV_SIZE, HC256_IV_WORDS, HC256_P_OFFSET, HC256_Q_OFFSET,
    HC256_TABLE_MASK, HC256_TABLE_SIZE, HC256_WARMUP_WORDS, KEY_WORDS,
};

use crate::stream::keystream::{Block, BlockFunction, KeystreamEngine};
use crate::types::{Key256, Nonce};

/// HC-256 keystream engine
pub type Hc256 = KeystreamEngine<Hc256Core>;

/// Steps in one full cycle over both tables
const CYCLE: usize = 2 * HC256_TABLE_SIZE;

#[inline(always)]
fn f1(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn f2(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// HC-256 table state
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Hc256Core {
    p: [u32; HC256_TABLE_SIZE],
    q: [u32; HC256_TABLE_SIZE],
    /// Step counter in `0..2048`; below 1024 the next word comes from P
    idx: usize,
}

impl Default for Hc256Core {
    fn default() -> Self {
        Self {
            p: [0u32; HC256_TABLE_SIZE],
            q: [0u32; HC256_TABLE_SIZE],
            idx: 0,
        }
    }
}

/// Sum of the four byte-indexed quarters of `table`
#[inline(always)]
fn h(table: &[u32; HC256_TABLE_SIZE], x: u32) -> u32 {
    table[(x & 0xff) as usize]
        .wrapping_add(table[256 + ((x >> 8) & 0xff) as usize])
        .wrapping_add(table[512 + ((x >> 16) & 0xff) as usize])
        .wrapping_add(table[768 + ((x >> 24) & 0xff) as usize])
}

/// Advance `table` at `j`, looking up into `other`, and return one output word
///
/// With `table = P, other = Q` this is the g1/h1 step; swapped it is g2/h2.
#[inline(always)]
fn step(table: &mut [u32; HC256_TABLE_SIZE], other: &[u32; HC256_TABLE_SIZE], j: usize) -> u32 {
    let x = table[(j + HC256_TABLE_SIZE - 3) & HC256_TABLE_MASK];
    let y = table[(j + 1) & HC256_TABLE_MASK];
    let g = (x.rotate_right(10) ^ y.rotate_right(23))
        .wrapping_add(other[((x ^ y) as usize) & HC256_TABLE_MASK]);

    table[j] = table[j]
        .wrapping_add(table[(j + HC256_TABLE_SIZE - 10) & HC256_TABLE_MASK])
        .wrapping_add(g);

    h(other, table[(j + HC256_TABLE_SIZE - 12) & HC256_TABLE_MASK]) ^ table[j]
}

impl Hc256Core {
    /// Produce the next keystream word
    fn next_word(&mut self) -> u32 {
        let j = self.idx & HC256_TABLE_MASK;
        let word = if self.idx < HC256_TABLE_SIZE {
            step(&mut self.p, &self.q, j)
        } else {
            step(&mut self.q, &self.p, j)
        };
        self.idx = (self.idx + 1) % CYCLE;
        word
    }
}

impl BlockFunction for Hc256Core {
    const NAME: &'static str = "HC-256";
    const IV_SIZE: usize = HC256_IV_SIZE;
    const SEEKABLE: bool = false;

    type Iv = Nonce<HC256_IV_SIZE>;

    fn rekey(&mut self, key: &Key256, iv: &Self::Iv) {
        let mut w = EphemeralSecret::new([0u32; HC256_INIT_WORDS]);

        w[..KEY_WORDS].copy_from_slice(key.words());
        LittleEndian::read_u32_into(iv.as_ref(), &mut w[KEY_WORDS..KEY_WORDS + HC256_IV_WORDS]);

        for i in KEY_WORDS + HC256_IV_WORDS..HC256_INIT_WORDS {
            w[i] = f2(w[i - 2])
                .wrapping_add(w[i - 7])
                .wrapping_add(f1(w[i - 15]))
                .wrapping_add(w[i - 16])
                .wrapping_add(i as u32);
        }

        self.p
            .copy_from_slice(&w[HC256_P_OFFSET..HC256_P_OFFSET + HC256_TABLE_SIZE]);
        self.q
            .copy_from_slice(&w[HC256_Q_OFFSET..HC256_Q_OFFSET + HC256_TABLE_SIZE]);
        self.idx = 0;

        for _ in 0..HC256_WARMUP_WORDS {
            self.next_word();
        }
        debug!("HC-256 tables initialized ({} warm-up words)", HC256_WARMUP_WORDS);
    }

    fn generate(&mut self, _key: &Key256, _iv: &Self::Iv, _block_index: u64, block: &mut Block) {
        for word in block.iter_mut() {
            *word = self.next_word();
        }
    }
}
