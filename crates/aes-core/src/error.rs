//! Error type shared by every cipher operation.

use thiserror::Error;

/// Failures reported by key validation, block transforms and the CBC wrapper.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AesError {
    /// Key is not 16, 24 or 32 bytes long.
    #[error("invalid key length {0} (expected 16, 24 or 32 bytes)")]
    InvalidKeyLength(usize),

    /// Block transform was handed something other than 16 bytes.
    #[error("invalid block length {0} (expected 16 bytes)")]
    InvalidBlockLength(usize),

    /// Ciphertext is empty or not a multiple of the block size.
    #[error("invalid ciphertext length {0} (expected a positive multiple of 16)")]
    InvalidCiphertextLength(usize),

    /// Padding bytes at the end of a decrypted message are malformed.
    #[error("invalid padding")]
    InvalidPadding,

    /// Initialization vector is not exactly one block.
    #[error("invalid IV length {0} (expected 16 bytes)")]
    InvalidIvLength(usize),
}

/// Result alias for cipher operations.
pub type Result<T> = std::result::Result<T, AesError>;
