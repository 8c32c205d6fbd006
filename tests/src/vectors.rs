//! Known-answer keystream vectors
//!
//! Each vector is a run of keystream (equivalently, the encryption of zeros)
//! starting at a given byte offset for the given key and IV.

use krypton_algorithms::Algorithm;

/// A single known-answer vector
pub struct KeystreamVector {
    /// Engine the vector applies to
    pub algorithm: Algorithm,
    /// Key, hex encoded
    pub key: &'static str,
    /// IV, hex encoded
    pub iv: &'static str,
    /// Byte offset of `keystream` in the stream
    pub offset: usize,
    /// Expected keystream, hex encoded
    pub keystream: &'static str,
}

impl KeystreamVector {
    /// Decoded key bytes
    pub fn key_bytes(&self) -> Vec<u8> {
        hex::decode(self.key).expect("vector key is valid hex")
    }

    /// Decoded IV bytes
    pub fn iv_bytes(&self) -> Vec<u8> {
        hex::decode(self.iv).expect("vector IV is valid hex")
    }

    /// Decoded expected keystream
    pub fn keystream_bytes(&self) -> Vec<u8> {
        hex::decode(self.keystream).expect("vector keystream is valid hex")
    }
}

const ZERO_32: &str = "0000000000000000000000000000000000000000000000000000000000000000";
const ZERO_8: &str = "0000000000000000";

/// Every known-answer vector
pub const VECTORS: &[KeystreamVector] = &[
    KeystreamVector {
        algorithm: Algorithm::ChaCha20,
        key: ZERO_32,
        iv: ZERO_8,
        offset: 0,
        keystream: concat!(
            "76b8e0ada0f13d90405d6ae55386bd28bdd219b8a08ded1aa836efcc8b770dc7",
            "da41597c5157488d7724e03fb8d84a376a43b8f41518a11cc387b669b2ee6586",
        ),
    },
    KeystreamVector {
        algorithm: Algorithm::ChaCha20,
        key: "0000000000000000000000000000000000000000000000000000000000000001",
        iv: ZERO_8,
        offset: 0,
        keystream: concat!(
            "4540f05a9f1fb296d7736e7b208e3c96eb4fe1834688d2604f450952ed432d41",
            "bbe2a0b6ea7566d2a5d1e7e20d42af2c53d792b1c43fea817e9ad275ae546963",
        ),
    },
    KeystreamVector {
        algorithm: Algorithm::ChaCha20,
        key: ZERO_32,
        iv: "0000000000000001",
        offset: 0,
        keystream: concat!(
            "de9cba7bf3d69ef5e786dc63973f653a0b49e015adbff7134fcb7df137821031",
            "e85a050278a7084527214f73efc7fa5b5277062eb7a0433e445f41e31afab757",
        ),
    },
    KeystreamVector {
        algorithm: Algorithm::ChaCha20,
        key: ZERO_32,
        iv: "0100000000000000",
        offset: 0,
        keystream: concat!(
            "ef3fdfd6c61578fbf5cf35bd3dd33b8009631634d21e42ac33960bd138e50d32",
            "111e4caf237ee53ca8ad6426194a88545ddc497a0b466e7d6bbdb0041b2f586b",
        ),
    },
    KeystreamVector {
        algorithm: Algorithm::Salsa20,
        key: ZERO_32,
        iv: ZERO_8,
        offset: 0,
        keystream: concat!(
            "9a97f65b9b4c721b960a672145fca8d4e32e67f9111ea979ce9c4826806aeee6",
            "3de9c0da2bd7f91ebcb2639bf989c6251b29bf38d39a9bdce7c55f4b2ac12a39",
        ),
    },
    KeystreamVector {
        algorithm: Algorithm::Salsa20,
        key: "0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20",
        iv: "0301040105090206",
        offset: 0,
        keystream: concat!(
            "6ebcbdbf76fccc64ab05542bee8a67cbc28fa2e141fbefbb3a2f9b221909c8d7",
            "d4295258cb539770dd24d7ac3443769ffa27a50e60644264dc8b6b612683372e",
        ),
    },
    KeystreamVector {
        algorithm: Algorithm::Hc256,
        key: ZERO_32,
        iv: ZERO_32,
        offset: 0,
        keystream: concat!(
            "5b078985d8f6f30d42c5c02fa6b6795153f06534801f89f24e74248b720b4818",
            "cd9227ecebcf4dbf8dbf6977e4ae14fae8504c7bc8a9f3ea6c0106f5327e6981",
        ),
    },
    KeystreamVector {
        algorithm: Algorithm::Hc256,
        key: ZERO_32,
        iv: "0100000000000000000000000000000000000000000000000000000000000000",
        offset: 0,
        keystream: concat!(
            "afe2a2bf4f17cee9fec2058bd1b18bb15fc042ee712b3101dd501fc60b082a50",
            "06c7feed41923d6348c4daa6ff6185af5a13045e34c44894f3e9e72ddf0b5237",
        ),
    },
    KeystreamVector {
        algorithm: Algorithm::Hc256,
        key: "5500000000000000000000000000000000000000000000000000000000000000",
        iv: ZERO_32,
        offset: 0,
        keystream: concat!(
            "1c404afe4fe25fed958f9ad1ae36c06f88a65a3cc0abe223aeb3902f420ed3a8",
            "6c3af05944eb396efb79758f5e7a1370d8b7106dcdf7d0adda233472e6dd75f5",
        ),
    },
    KeystreamVector {
        algorithm: Algorithm::Hc256,
        key: ZERO_32,
        iv: ZERO_32,
        offset: 4096,
        keystream: "a22d7682b12833a6f4b806b035beff718ac37d99b0e8a68953f6890254def349",
    },
];
