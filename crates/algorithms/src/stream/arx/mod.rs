//! Shared block function for the Salsa/ChaCha family
//!
//! Both ciphers build a 16-word input from the constants, the key, a 64-bit
//! block counter and a 64-bit IV, run ten double rounds over a copy of it and
//! add the input back word by word. Only the lane layout and the double round
//! differ, and those are supplied by an [`ArxCore`].

use core::marker::PhantomData;

use byteorder::{ByteOrder, LittleEndian};
use zeroize::Zeroize;

use krypton_common::security::EphemeralSecret;
use krypton_params::{ARX_DOUBLE_ROUNDS, ARX_IV_SIZE, ARX_IV_WORDS, BLOCK_WORDS};

use crate::stream::keystream::{Block, BlockFunction};
use crate::stream::seekable::RandomAccess;
use crate::types::{Key256, Nonce};

/// Lane layout and round function of one ARX cipher
pub trait ArxCore {
    /// Canonical algorithm name
    const NAME: &'static str;

    /// Lay out constants, key, counter and IV
    fn init_block(key: &Key256, iv: &[u32; ARX_IV_WORDS], block_index: u64, state: &mut Block);

    /// One column round followed by one row (or diagonal) round
    fn double_round(state: &mut Block);
}

/// Compute keystream block `block_index` for core `C`
pub fn stream_block<C: ArxCore>(
    key: &Key256,
    iv: &[u32; ARX_IV_WORDS],
    block_index: u64,
    out: &mut Block,
) {
    let mut input = EphemeralSecret::new([0u32; BLOCK_WORDS]);
    C::init_block(key, iv, block_index, &mut input);

    let mut working = input.clone();
    for _ in 0..ARX_DOUBLE_ROUNDS {
        C::double_round(&mut working);
    }

    for (o, (w, i)) in out.iter_mut().zip(working.iter().zip(input.iter())) {
        *o = w.wrapping_add(*i);
    }
}

/// [`BlockFunction`] adapter for an [`ArxCore`]
pub struct Arx<C: ArxCore> {
    _core: PhantomData<C>,
}

impl<C: ArxCore> Default for Arx<C> {
    fn default() -> Self {
        Self { _core: PhantomData }
    }
}

// Stateless: the key and IV are owned by the engine.
impl<C: ArxCore> Zeroize for Arx<C> {
    fn zeroize(&mut self) {}
}

impl<C: ArxCore> BlockFunction for Arx<C> {
    const NAME: &'static str = C::NAME;
    const IV_SIZE: usize = ARX_IV_SIZE;
    const SEEKABLE: bool = true;

    type Iv = Nonce<ARX_IV_SIZE>;

    fn generate(&mut self, key: &Key256, iv: &Self::Iv, block_index: u64, block: &mut Block) {
        let mut iv_words = [0u32; ARX_IV_WORDS];
        LittleEndian::read_u32_into(iv.as_ref(), &mut iv_words);

        stream_block::<C>(key, &iv_words, block_index, block);
    }
}

impl<C: ArxCore> RandomAccess for Arx<C> {}
