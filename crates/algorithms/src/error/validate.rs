//! Validation utilities for the stream engines

use super::{Error, Result};
use krypton_params::KEY_SIZE;

/// Validate a key length
#[inline(always)]
pub fn key_length(actual: usize) -> Result<()> {
    if actual != KEY_SIZE {
        return Err(Error::InvalidKeyLength {
            expected: KEY_SIZE,
            actual,
        });
    }
    Ok(())
}

/// Validate an IV length for `algorithm`
#[inline(always)]
pub fn iv_length(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidIvLength {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a non-seekable keystream is only ever entered at byte 0
#[inline(always)]
pub fn seekable(algorithm: &'static str, seekable: bool, position: u64) -> Result<()> {
    if !seekable && position != 0 {
        return Err(Error::UnsupportedSeek {
            algorithm,
            position,
        });
    }
    Ok(())
}

/// Validate that a key has been installed
#[inline(always)]
pub fn initialized(algorithm: &'static str, initialized: bool) -> Result<()> {
    if !initialized {
        return Err(Error::Uninitialized { algorithm });
    }
    Ok(())
}
