//! Published test vectors: FIPS-197 appendices A and C, SP 800-38A F.2.1.

use aes_core::{
    decrypt_block, decrypt_message, encrypt_block, encrypt_message, expand_key, AesError, Block,
};

fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid hex in test vector")
}

fn block(s: &str) -> Block {
    unhex(s).try_into().expect("16-byte test vector")
}

const FIPS_PLAIN: &str = "00112233445566778899aabbccddeeff";

#[test]
fn fips197_appendix_c_all_key_sizes() {
    let cases = [
        (
            "000102030405060708090a0b0c0d0e0f",
            "69c4e0d86a7b0430d8cdb78070b4c55a",
        ),
        (
            "000102030405060708090a0b0c0d0e0f1011121314151617",
            "dda97ca4864cdfe06eaf70a0ec0d7191",
        ),
        (
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            "8ea2b7ca516745bfeafc49904b496089",
        ),
    ];
    for (key, expected) in cases {
        let schedule = expand_key(&unhex(key)).unwrap();
        let ct = encrypt_block(&block(FIPS_PLAIN), &schedule);
        assert_eq!(hex::encode(ct), expected, "key {key}");
        assert_eq!(decrypt_block(&ct, &schedule), block(FIPS_PLAIN));
    }
}

#[test]
fn fips197_appendix_a_key_expansion() {
    // (key, first derived word, last round key, schedule length)
    let cases = [
        (
            "2b7e151628aed2a6abf7158809cf4f3c",
            "a0fafe17",
            "d014f9a8c9ee2589e13f0cc8b6630ca6",
            11,
        ),
        (
            "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b",
            "fe0c91f7",
            "e98ba06f448c773c8ecc720401002202",
            13,
        ),
        (
            "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
            "9ba35411",
            "fe4890d1e6188d0b046df344706c631e",
            15,
        ),
    ];
    for (key, first_derived, last, len) in cases {
        let key = unhex(key);
        let schedule = expand_key(&key).unwrap();
        assert_eq!(schedule.len(), len);
        assert_eq!(schedule.rounds() + 1, len);

        let words: Vec<u8> = schedule.iter().flatten().copied().collect();
        let nk_bytes = key.len();
        assert_eq!(&words[..nk_bytes], &key[..]);
        assert_eq!(hex::encode(&words[nk_bytes..nk_bytes + 4]), first_derived);
        assert_eq!(hex::encode(schedule.get(len - 1)), last);
    }
}

#[test]
fn sp800_38a_cbc_aes128() {
    let key = unhex("2b7e151628aed2a6abf7158809cf4f3c");
    let iv = unhex("000102030405060708090a0b0c0d0e0f");
    let plaintext = unhex(concat!(
        "6bc1bee22e409f96e93d7e117393172a",
        "ae2d8a571e03ac9c9eb76fac45af8e51",
        "30c81c46a35ce411e5fbc1191a0a52ef",
        "f69f2445df4f9b17ad2b417be66c3710",
    ));
    let expected = concat!(
        "7649abac8119b246cee98e9b12e9197d",
        "5086cb9b507219ee95db113a917678b2",
        "73bed6b8e3c1743b7116e69e22229516",
        "3ff1caa1681fac09120eca307586e1a7",
    );

    let ct = encrypt_message(&plaintext, &key, &iv).unwrap();
    assert_eq!(ct.len(), 80);
    assert_eq!(hex::encode(&ct[..64]), expected);
    // Aligned input gains a whole padding block.
    assert_eq!(hex::encode(&ct[64..]), "8cb82807230e1321d3fae00d18cc2012");
    assert_eq!(decrypt_message(&ct, &key, &iv).unwrap(), plaintext);
}

#[test]
fn openssl_compatible_demo_key() {
    // Same key/IV pair as the console demo; output matches `openssl enc -aes-256-cbc`.
    let key = b"01234567890123456789012345678901";
    let iv = b"0123456789012345";
    let ct = encrypt_message(b"Hello, World!", key, iv).unwrap();
    assert_eq!(hex::encode(&ct), "a68bf8be5836c25bc4b30bbd0d1326d7");
    assert_eq!(decrypt_message(&ct, key, iv).unwrap(), b"Hello, World!");
}

#[test]
fn cbc_aes192_with_padding() {
    let key: Vec<u8> = (0u8..24).collect();
    let iv: Vec<u8> = (16u8..32).collect();
    let message = b"The quick brown fox jumps over the lazy dog";
    let ct = encrypt_message(message, &key, &iv).unwrap();
    assert_eq!(
        hex::encode(&ct),
        concat!(
            "01b742cb0cb83034d18bbba2db4864db",
            "10a2646fa546049591e85857c816b782",
            "d7acb89e696c2e99ab80f6c7cd114608",
        )
    );
}

#[test]
fn empty_message_is_one_padding_block() {
    let ct = encrypt_message(&[], &[0u8; 16], &[0u8; 16]).unwrap();
    assert_eq!(hex::encode(&ct), "0143db63ee66b0cdff9f69917680151e");
    assert_eq!(decrypt_message(&ct, &[0u8; 16], &[0u8; 16]).unwrap(), b"");
}

#[test]
fn flipped_last_byte_breaks_padding() {
    let cases: [(&[u8], usize); 5] = [
        (&b"Tamper-evident padding check"[..], 16),
        (&b""[..], 16),
        (&b"Tamper-evident padding check"[..], 24),
        (&b"exactly sixteen!"[..], 24),
        (&b"Tamper-evident padding check"[..], 32),
    ];
    let iv: Vec<u8> = (0u8..16).rev().collect();
    for (message, key_len) in cases {
        let key: Vec<u8> = (0..key_len as u8).collect();
        let ct = encrypt_message(message, &key, &iv).unwrap();
        for flip in [0x01u8, 0x80, 0xff] {
            let mut tampered = ct.clone();
            *tampered.last_mut().unwrap() ^= flip;
            assert_eq!(
                decrypt_message(&tampered, &key, &iv),
                Err(AesError::InvalidPadding),
                "key_len {key_len}, flip {flip:#04x}"
            );
        }
    }
}
