//! Forward and inverse substitution tables.

use crate::gf::gf_inverse;

/// Affine constant added after the bit mixing.
const AFFINE_CONSTANT: u8 = 0x63;

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let q = gf_inverse(i as u8);
        table[i] = q
            ^ q.rotate_left(1)
            ^ q.rotate_left(2)
            ^ q.rotate_left(3)
            ^ q.rotate_left(4)
            ^ AFFINE_CONSTANT;
        i += 1;
    }
    table
}

const fn build_inv_sbox(forward: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[forward[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// The AES S-box.
pub const SBOX: [u8; 256] = build_sbox();

/// Inverse of [`SBOX`].
pub const INV_SBOX: [u8; 256] = build_inv_sbox(&SBOX);

/// Looks up `byte` in the forward S-box.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Looks up `byte` in the inverse S-box.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}
