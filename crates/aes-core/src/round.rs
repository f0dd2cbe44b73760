//! AES round transformations.
//!
//! Each function mutates one 16-byte state in place. The state is column-major,
//! so row `r` of column `c` lives at index `r + 4 * c`.

use crate::block::{xor_in_place, Block};
use crate::gf::{gf_multiply, xtime};
use crate::sbox::{inv_sbox, sbox};

/// Circulant matrix applied to every column by MixColumns.
pub const MIX_MATRIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

/// Inverse of [`MIX_MATRIX`] over GF(2^8).
pub const INV_MIX_MATRIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

#[inline]
const fn index(row: usize, col: usize) -> usize {
    row + 4 * col
}

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[index(row, col)] = src[index(row, (col + row) % 4)];
        }
    }
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[index(row, (col + row) % 4)] = src[index(row, col)];
        }
    }
}

fn mix_single_column(col: &mut [u8; 4]) {
    // Forward matrix only has 01/02/03 entries, so xtime is enough.
    let [a0, a1, a2, a3] = *col;
    col[0] = xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3;
    col[1] = a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3;
    col[2] = a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3);
    col[3] = (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3);
}

fn multiply_column(matrix: &[[u8; 4]; 4], col: &mut [u8; 4]) {
    let input = *col;
    for (out, row) in col.iter_mut().zip(matrix.iter()) {
        *out = row
            .iter()
            .zip(input.iter())
            .fold(0, |acc, (&m, &a)| acc ^ gf_multiply(m, a));
    }
}

fn for_each_column(state: &mut Block, mut f: impl FnMut(&mut [u8; 4])) {
    for chunk in state.chunks_exact_mut(4) {
        let mut column = [chunk[0], chunk[1], chunk[2], chunk[3]];
        f(&mut column);
        chunk.copy_from_slice(&column);
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for_each_column(state, mix_single_column);
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for_each_column(state, |col| multiply_column(&INV_MIX_MATRIX, col));
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
