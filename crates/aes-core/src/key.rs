//! Key types for AES-128, AES-192 and AES-256.

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;
use crate::error::{AesError, Result};

/// The three AES variants, selected by key length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 16-byte key, 10 rounds.
    Aes128,
    /// 24-byte key, 12 rounds.
    Aes192,
    /// 32-byte key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Maps a key length in bytes to its variant.
    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(AesError::InvalidKeyLength(other)),
        }
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    /// Key length in 32-bit words (`Nk`).
    pub const fn words(self) -> usize {
        self.key_len() / 4
    }

    /// Number of rounds (`Nr`).
    pub const fn rounds(self) -> usize {
        self.words() + 6
    }

    /// Key length in bits.
    pub const fn bits(self) -> usize {
        self.key_len() * 8
    }
}

impl fmt::Display for KeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

/// A validated AES key. The bytes are wiped when the key is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Key {
    bytes: Vec<u8>,
    #[zeroize(skip)]
    size: KeySize,
}

impl Key {
    /// Validates `bytes` as a 16, 24 or 32 byte key.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let size = KeySize::from_len(bytes.len())?;
        Ok(Self {
            bytes: bytes.to_vec(),
            size,
        })
    }

    /// Which AES variant this key selects.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").field("size", &self.size).finish_non_exhaustive()
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = AesError;

    fn try_from(value: &[u8]) -> Result<Self> {
        Self::new(value)
    }
}

macro_rules! key_from_array {
    ($($len:literal => $size:ident),*) => {
        $(
            impl From<[u8; $len]> for Key {
                fn from(value: [u8; $len]) -> Self {
                    Self {
                        bytes: value.to_vec(),
                        size: KeySize::$size,
                    }
                }
            }
        )*
    };
}

key_from_array!(16 => Aes128, 24 => Aes192, 32 => Aes256);

/// Expanded round keys: always `rounds + 1` blocks.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    round_keys: Vec<Block>,
    #[zeroize(skip)]
    size: KeySize,
}

impl KeySchedule {
    pub(crate) fn from_round_keys(round_keys: Vec<Block>, size: KeySize) -> Self {
        debug_assert_eq!(round_keys.len(), size.rounds() + 1);
        Self { round_keys, size }
    }

    /// Returns the round key at the requested index (`0..=rounds`).
    ///
    /// # Panics
    ///
    /// Panics if `round > self.rounds()`.
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.round_keys[round]
    }

    /// Number of cipher rounds this schedule drives.
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Number of round keys (`rounds + 1`).
    pub fn len(&self) -> usize {
        self.round_keys.len()
    }

    /// Always false; present for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.round_keys.is_empty()
    }

    /// Variant the schedule was expanded for.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Round keys in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.round_keys.iter()
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySchedule")
            .field("size", &self.size)
            .field("round_keys", &self.round_keys.len())
            .finish()
    }
}
