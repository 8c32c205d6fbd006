//! Error type definitions for cipher operations

use alloc::string::String;

/// Primary error type for cipher operations
///
/// Every variant is raised eagerly, before an engine's state is touched: a
/// failed call leaves the engine exactly as it was. Applying keystream on an
/// initialized engine never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The key is not the 32 bytes every engine requires
    #[error("invalid key length (expected {expected}, got {actual})")]
    InvalidKeyLength {
        expected: usize,
        actual: usize,
    },

    /// The IV length does not match the algorithm
    #[error("{algorithm}: invalid IV length (expected {expected}, got {actual})")]
    InvalidIvLength {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The engine cannot reposition its keystream
    #[error("{algorithm}: keystream is not seekable (requested position {position})")]
    UnsupportedSeek {
        algorithm: &'static str,
        position: u64,
    },

    /// The engine has no key yet
    #[error("{algorithm}: engine has not been initialized")]
    Uninitialized {
        algorithm: &'static str,
    },

    /// No engine is registered under the given name
    #[error("unknown stream cipher algorithm '{name}'")]
    UnknownAlgorithm {
        name: String,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// The algorithm the error was raised for, when it is tied to one
    pub fn algorithm(&self) -> Option<&'static str> {
        match self {
            Self::InvalidIvLength { algorithm, .. }
            | Self::UnsupportedSeek { algorithm, .. }
            | Self::Uninitialized { algorithm } => Some(algorithm),
            _ => None,
        }
    }
}
