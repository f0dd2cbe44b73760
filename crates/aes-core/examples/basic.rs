//! Encrypts a message with AES-256-CBC and prints the first round of its trace.

use aes_core::{decrypt_message, encrypt_message, expand_key, trace_encrypt, StateGrid};

fn main() -> aes_core::Result<()> {
    // Fixed key and IV for reproducibility in the example.
    let key = [0x2bu8; 32];
    let iv = [0u8; 16];

    let ciphertext = encrypt_message(b"first block here and a tail", &key, &iv)?;
    let plaintext = decrypt_message(&ciphertext, &key, &iv)?;
    assert_eq!(plaintext, b"first block here and a tail");

    let schedule = expand_key(&key)?;
    let mut block = [0u8; 16];
    block.copy_from_slice(&ciphertext[..16]);
    for step in trace_encrypt(&block, &schedule).round(1) {
        println!("{}\n{}\n", step.stage, StateGrid(&step.state));
    }

    println!("example succeeded; {} ciphertext bytes", ciphertext.len());
    Ok(())
}
