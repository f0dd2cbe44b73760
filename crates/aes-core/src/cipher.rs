//! AES key schedule and block encryption/decryption.

use log::trace;
use zeroize::Zeroize;

use crate::block::{block_from_slice, Block, BLOCK_SIZE};
use crate::cbc::{self, Iv};
use crate::error::Result;
use crate::gf::xtime;
use crate::key::{Key, KeySchedule, KeySize};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;
use crate::trace::Stage;

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands raw key bytes into `rounds + 1` round keys.
///
/// Fails with [`AesError::InvalidKeyLength`](crate::AesError::InvalidKeyLength)
/// unless the key is 16, 24 or 32 bytes.
pub fn expand_key(key: &[u8]) -> Result<KeySchedule> {
    let key = Key::new(key)?;
    Ok(KeySchedule::new(&key))
}

impl KeySchedule {
    /// Expands a validated key.
    pub fn new(key: &Key) -> Self {
        let size = key.size();
        let nk = size.words();
        let total_words = BLOCK_SIZE / 4 * (size.rounds() + 1);

        let mut w: Vec<u32> = key
            .as_bytes()
            .chunks_exact(4)
            .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        w.reserve_exact(total_words - nk);

        let mut rcon = 0x01u8;
        for i in nk..total_words {
            let mut temp = w[i - 1];
            if i % nk == 0 {
                temp = sub_word(rot_word(temp)) ^ (u32::from(rcon) << 24);
                rcon = xtime(rcon);
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }
            w.push(w[i - nk] ^ temp);
        }

        let round_keys: Vec<Block> = w
            .chunks_exact(4)
            .map(|words| {
                let mut round_key = [0u8; 16];
                for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
                    dst.copy_from_slice(&word.to_be_bytes());
                }
                round_key
            })
            .collect();

        w.zeroize();

        trace!("expanded {} key into {} round keys", size, round_keys.len());
        Self::from_round_keys(round_keys, size)
    }
}

/// Runs the forward cipher, reporting the state after every stage to `observe`.
pub(crate) fn encrypt_observed(
    block: &Block,
    schedule: &KeySchedule,
    mut observe: impl FnMut(usize, Stage, &Block),
) -> Block {
    let rounds = schedule.rounds();
    let mut state = *block;
    observe(0, Stage::Input, &state);

    add_round_key(&mut state, schedule.get(0));
    observe(0, Stage::AddRoundKey, &state);

    for round in 1..=rounds {
        sub_bytes(&mut state);
        observe(round, Stage::SubBytes, &state);
        shift_rows(&mut state);
        observe(round, Stage::ShiftRows, &state);
        if round != rounds {
            mix_columns(&mut state);
            observe(round, Stage::MixColumns, &state);
        }
        add_round_key(&mut state, schedule.get(round));
        observe(round, Stage::AddRoundKey, &state);
    }

    state
}

/// Runs the inverse cipher, reporting the state after every stage to `observe`.
///
/// Rounds are numbered by the round key they consume, so the trace counts
/// down from `rounds` to 0.
pub(crate) fn decrypt_observed(
    block: &Block,
    schedule: &KeySchedule,
    mut observe: impl FnMut(usize, Stage, &Block),
) -> Block {
    let rounds = schedule.rounds();
    let mut state = *block;
    observe(rounds, Stage::Input, &state);

    add_round_key(&mut state, schedule.get(rounds));
    observe(rounds, Stage::AddRoundKey, &state);

    for round in (0..rounds).rev() {
        inv_shift_rows(&mut state);
        observe(round, Stage::InvShiftRows, &state);
        inv_sub_bytes(&mut state);
        observe(round, Stage::InvSubBytes, &state);
        add_round_key(&mut state, schedule.get(round));
        observe(round, Stage::AddRoundKey, &state);
        if round != 0 {
            inv_mix_columns(&mut state);
            observe(round, Stage::InvMixColumns, &state);
        }
    }

    state
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    encrypt_observed(block, schedule, |_, _, _| {})
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    decrypt_observed(block, schedule, |_, _, _| {})
}

/// AES cipher bound to one key, caching its schedule across calls.
#[derive(Clone, Debug)]
pub struct Aes {
    schedule: KeySchedule,
}

impl Aes {
    /// Validates `key` and expands its schedule.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            schedule: expand_key(key)?,
        })
    }

    /// Builds a cipher from an already validated key.
    pub fn from_key(key: &Key) -> Self {
        Self {
            schedule: KeySchedule::new(key),
        }
    }

    /// Variant selected by the key.
    pub fn key_size(&self) -> KeySize {
        self.schedule.key_size()
    }

    /// The cached round keys.
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// Encrypts exactly one block given as a byte slice.
    pub fn encrypt_block(&self, block: &[u8]) -> Result<Block> {
        let block = block_from_slice(block)?;
        Ok(encrypt_block(&block, &self.schedule))
    }

    /// Decrypts exactly one block given as a byte slice.
    pub fn decrypt_block(&self, block: &[u8]) -> Result<Block> {
        let block = block_from_slice(block)?;
        Ok(decrypt_block(&block, &self.schedule))
    }

    /// CBC-encrypts a padded message under this key.
    pub fn encrypt_message(&self, plaintext: &[u8], iv: &Iv) -> Vec<u8> {
        cbc::encrypt_with_schedule(plaintext, &self.schedule, iv)
    }

    /// CBC-decrypts a message under this key and strips its padding.
    pub fn decrypt_message(&self, ciphertext: &[u8], iv: &Iv) -> Result<Vec<u8>> {
        cbc::decrypt_with_schedule(ciphertext, &self.schedule, iv)
    }
}
