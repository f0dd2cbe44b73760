//! From-scratch AES used by the `aes-lab` command-line primer.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - GF(2^8)-derived S-boxes and column-mixing constants.
//! - Key schedules for AES-128, AES-192 and AES-256.
//! - Single-block encryption and decryption.
//! - CBC chaining with PKCS#7 padding for whole messages.
//! - Round-by-round traces of the block transform.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.
//!
//! ```
//! let key = [0u8; 32];
//! let iv = [0u8; 16];
//! let ct = aes_core::encrypt_message(b"hello", &key, &iv).unwrap();
//! assert_eq!(aes_core::decrypt_message(&ct, &key, &iv).unwrap(), b"hello");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cbc;
mod cipher;
mod error;
mod gf;
mod key;
mod padding;
pub mod round;
mod sbox;
mod trace;

pub use crate::block::{block_from_slice, xor_in_place, Block, BLOCK_SIZE};
pub use crate::cbc::{decrypt_message, encrypt_message, Iv};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key, Aes};
pub use crate::error::{AesError, Result};
pub use crate::key::{Key, KeySchedule, KeySize};
pub use crate::padding::{pad, unpad};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, SBOX};
pub use crate::trace::{trace_decrypt, trace_encrypt, StateGrid, Stage, Trace, TraceStep};
