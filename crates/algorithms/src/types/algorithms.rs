//! Algorithm descriptors
//!
//! [`Algorithm`] is the runtime handle an adapter uses to pick an engine:
//! parse it from a name, ask it for sizes, and construct a boxed engine.
//! There is no global registration table; the enum is the registry.

use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use krypton_api::StreamCipher;
use krypton_params::{
    BLOCK_SIZE, CHACHA20_IV_SIZE, HC256_IV_SIZE, KEY_SIZE, SALSA20_IV_SIZE,
};

use crate::error::{Error, Result};
use crate::stream::{ChaCha20, Hc256, Salsa20};

/// The keystream algorithms provided by this crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// Salsa20/20 with a 64-bit IV and 64-bit block counter
    Salsa20,
    /// ChaCha20 with a 64-bit IV and 64-bit block counter
    ChaCha20,
    /// HC-256 with a 256-bit IV
    #[cfg_attr(feature = "serde", serde(rename = "HC-256"))]
    Hc256,
}

impl Algorithm {
    /// Every supported algorithm
    pub const ALL: [Algorithm; 3] = [Algorithm::Salsa20, Algorithm::ChaCha20, Algorithm::Hc256];

    /// Canonical algorithm name
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Salsa20 => "Salsa20",
            Algorithm::ChaCha20 => "ChaCha20",
            Algorithm::Hc256 => "HC-256",
        }
    }

    /// Key size in bytes
    pub const fn key_size(self) -> usize {
        KEY_SIZE
    }

    /// IV size in bytes
    pub const fn iv_size(self) -> usize {
        match self {
            Algorithm::Salsa20 => SALSA20_IV_SIZE,
            Algorithm::ChaCha20 => CHACHA20_IV_SIZE,
            Algorithm::Hc256 => HC256_IV_SIZE,
        }
    }

    /// Keystream block size in bytes
    pub const fn block_size(self) -> usize {
        BLOCK_SIZE
    }

    /// Whether the keystream can be entered at an arbitrary byte offset
    pub const fn is_seekable(self) -> bool {
        !matches!(self, Algorithm::Hc256)
    }

    /// Construct a fresh, uninitialized engine
    pub fn construct(self) -> Box<dyn StreamCipher> {
        match self {
            Algorithm::Salsa20 => Box::new(Salsa20::new()),
            Algorithm::ChaCha20 => Box::new(ChaCha20::new()),
            Algorithm::Hc256 => Box::new(Hc256::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case("Salsa20") {
            Ok(Algorithm::Salsa20)
        } else if name.eq_ignore_ascii_case("ChaCha20") {
            Ok(Algorithm::ChaCha20)
        } else if name.eq_ignore_ascii_case("HC-256") || name.eq_ignore_ascii_case("HC256") {
            Ok(Algorithm::Hc256)
        } else {
            Err(Error::UnknownAlgorithm {
                name: name.to_string(),
            })
        }
    }
}
