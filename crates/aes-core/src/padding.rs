//! PKCS#7 padding to the AES block size.

use crate::block::BLOCK_SIZE;
use crate::error::{AesError, Result};

/// Appends `N` bytes of value `N`, where `N = 16 - (len % 16)`.
///
/// Always adds between 1 and 16 bytes, so already aligned input gains a whole
/// block of `0x10`.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Returns `data` without its trailing padding.
pub fn unpad(data: &[u8]) -> Result<&[u8]> {
    let &last = data.last().ok_or(AesError::InvalidPadding)?;
    let pad_len = usize::from(last);
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > data.len() {
        return Err(AesError::InvalidPadding);
    }
    let (body, padding) = data.split_at(data.len() - pad_len);
    if padding.iter().any(|&b| b != last) {
        return Err(AesError::InvalidPadding);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_partial_block() {
        let padded = pad(b"YELLOW SUBMARINE!");
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[17..], &[15u8; 15]);
    }

    #[test]
    fn aligned_input_gains_full_block() {
        let padded = pad(&[0xaa; 16]);
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[16..], &[16u8; 16]);
        assert_eq!(pad(&[]), vec![16u8; 16]);
    }

    #[test]
    fn unpad_inverts_pad() {
        for len in 0..48 {
            let data: Vec<u8> = (0..len as u8).collect();
            let padded = pad(&data);
            assert_eq!(padded.len() % BLOCK_SIZE, 0);
            assert_eq!(unpad(&padded).unwrap(), &data[..]);
        }
    }

    #[test]
    fn rejects_malformed_padding() {
        assert_eq!(unpad(&[]), Err(AesError::InvalidPadding));

        let mut block = [4u8; 16];
        block[15] = 0;
        assert_eq!(unpad(&block), Err(AesError::InvalidPadding));

        block[15] = 17;
        assert_eq!(unpad(&block), Err(AesError::InvalidPadding));

        let mut block = [0u8; 16];
        block[13..].copy_from_slice(&[3, 2, 3]);
        assert_eq!(unpad(&block), Err(AesError::InvalidPadding));

        assert_eq!(unpad(&[5, 5, 5]), Err(AesError::InvalidPadding));
    }
}
