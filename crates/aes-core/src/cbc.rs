//! CBC (Cipher Block Chaining) mode with PKCS#7 padding.

use log::debug;

use crate::block::{block_from_slice, xor_in_place, Block, BLOCK_SIZE};
use crate::cipher::{decrypt_block, encrypt_block, expand_key};
use crate::error::{AesError, Result};
use crate::key::KeySchedule;
use crate::padding::{pad, unpad};

/// Initialization vector for CBC: one block, unique per message under a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Iv(Block);

impl Iv {
    /// Validates that `bytes` is exactly one block.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        block_from_slice(bytes)
            .map(Self)
            .map_err(|_| AesError::InvalidIvLength(bytes.len()))
    }

    /// The IV bytes.
    pub fn as_block(&self) -> &Block {
        &self.0
    }
}

impl From<Block> for Iv {
    fn from(value: Block) -> Self {
        Self(value)
    }
}

/// Pads and encrypts `plaintext` under `key` in CBC mode.
///
/// Fails on a bad key or IV length; the ciphertext is always one to sixteen
/// bytes longer than the plaintext.
pub fn encrypt_message(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let schedule = expand_key(key)?;
    let iv = Iv::new(iv)?;
    Ok(encrypt_with_schedule(plaintext, &schedule, &iv))
}

/// Decrypts a CBC `ciphertext` under `key` and strips its padding.
pub fn decrypt_message(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let schedule = expand_key(key)?;
    let iv = Iv::new(iv)?;
    decrypt_with_schedule(ciphertext, &schedule, &iv)
}

pub(crate) fn encrypt_with_schedule(plaintext: &[u8], schedule: &KeySchedule, iv: &Iv) -> Vec<u8> {
    let padded = pad(plaintext);
    let mut ciphertext = Vec::with_capacity(padded.len());
    let mut previous = *iv.as_block();

    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        xor_in_place(&mut block, &previous);
        previous = encrypt_block(&block, schedule);
        ciphertext.extend_from_slice(&previous);
    }

    debug!(
        "cbc encrypt: {} plaintext bytes -> {} blocks ({})",
        plaintext.len(),
        ciphertext.len() / BLOCK_SIZE,
        schedule.key_size()
    );
    ciphertext
}

pub(crate) fn decrypt_with_schedule(
    ciphertext: &[u8],
    schedule: &KeySchedule,
    iv: &Iv,
) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(AesError::InvalidCiphertextLength(ciphertext.len()));
    }

    let mut plaintext = Vec::with_capacity(ciphertext.len());
    let mut previous = *iv.as_block();

    for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
        let mut current = [0u8; BLOCK_SIZE];
        current.copy_from_slice(chunk);
        let mut block = decrypt_block(&current, schedule);
        xor_in_place(&mut block, &previous);
        plaintext.extend_from_slice(&block);
        previous = current;
    }

    let body_len = unpad(&plaintext)?.len();
    plaintext.truncate(body_len);
    debug!(
        "cbc decrypt: {} blocks -> {} plaintext bytes ({})",
        ciphertext.len() / BLOCK_SIZE,
        body_len,
        schedule.key_size()
    );
    Ok(plaintext)
}
