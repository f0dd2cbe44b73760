//! Property-based round-trip tests across all key sizes.

use aes_core::{
    decrypt_block, decrypt_message, encrypt_block, encrypt_message, expand_key, pad, unpad, Aes,
    AesError, Iv,
};
use proptest::prelude::*;

fn any_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

fn bad_key_len() -> impl Strategy<Value = usize> {
    (0usize..64).prop_filter("valid AES key length", |len| ![16, 24, 32].contains(len))
}

proptest! {
    #[test]
    fn block_round_trip(key in any_key(), block in any::<[u8; 16]>()) {
        let schedule = expand_key(&key).unwrap();
        prop_assert_eq!(schedule.len(), key.len() / 4 + 7);
        let ct = encrypt_block(&block, &schedule);
        prop_assert_eq!(decrypt_block(&ct, &schedule), block);
    }

    #[test]
    fn message_round_trip(
        key in any_key(),
        iv in any::<[u8; 16]>(),
        message in prop::collection::vec(any::<u8>(), 0..200)
    ) {
        let ct = encrypt_message(&message, &key, &iv).unwrap();
        prop_assert_eq!(ct.len() % 16, 0);
        prop_assert!(ct.len() > message.len());
        prop_assert!(ct.len() <= message.len() + 16);
        prop_assert_eq!(decrypt_message(&ct, &key, &iv).unwrap(), message);
    }

    #[test]
    fn cached_cipher_matches_one_shot(
        key in any_key(),
        iv in any::<[u8; 16]>(),
        message in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let aes = Aes::new(&key).unwrap();
        let ct = aes.encrypt_message(&message, &Iv::from(iv));
        prop_assert_eq!(&ct, &encrypt_message(&message, &key, &iv).unwrap());
    }

    #[test]
    fn padding_round_trip(data in prop::collection::vec(any::<u8>(), 0..100)) {
        let padded = pad(&data);
        let added = padded.len() - data.len();
        prop_assert!((1..=16).contains(&added));
        prop_assert!(padded[data.len()..].iter().all(|&b| usize::from(b) == added));
        prop_assert_eq!(unpad(&padded).unwrap(), &data[..]);
    }

    #[test]
    fn invalid_key_lengths_rejected(len in bad_key_len()) {
        let key = vec![0u8; len];
        prop_assert_eq!(expand_key(&key).unwrap_err(), AesError::InvalidKeyLength(len));
        prop_assert_eq!(
            encrypt_message(b"data", &key, &[0u8; 16]).unwrap_err(),
            AesError::InvalidKeyLength(len)
        );
    }

    #[test]
    fn misaligned_ciphertext_rejected(len in (1usize..100).prop_filter("aligned", |l| l % 16 != 0)) {
        let data = vec![0u8; len];
        prop_assert_eq!(
            decrypt_message(&data, &[0u8; 16], &[0u8; 16]),
            Err(AesError::InvalidCiphertextLength(len))
        );
    }
}
