//! Text encodings for ciphertext on the command line.

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::ValueEnum;

/// How ciphertext is written out and read back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    /// Lowercase hexadecimal.
    #[default]
    Hex,
    /// Standard base64 with padding.
    Base64,
    /// Raw bytes, no text encoding.
    Raw,
}

impl Encoding {
    /// Encodes `bytes` for output.
    pub fn encode(self, bytes: &[u8]) -> Vec<u8> {
        match self {
            Self::Hex => hex::encode(bytes).into_bytes(),
            Self::Base64 => STANDARD.encode(bytes).into_bytes(),
            Self::Raw => bytes.to_vec(),
        }
    }

    /// Decodes input previously produced by [`Encoding::encode`].
    ///
    /// Surrounding whitespace is ignored for the text encodings.
    pub fn decode(self, input: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Hex => hex::decode(input.trim_ascii()).context("decode hex input"),
            Self::Base64 => STANDARD
                .decode(input.trim_ascii())
                .context("decode base64 input"),
            Self::Raw => Ok(input.to_vec()),
        }
    }

    /// Whether the encoded form is printable text.
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Raw)
    }
}

/// Parses a hex string that must decode to exactly `N` bytes.
pub fn parse_fixed_hex<const N: usize>(what: &str, hex_str: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))?;
    bytes.try_into().map_err(|bytes: Vec<u8>| {
        anyhow::anyhow!(
            "{} must be {} bytes ({} hex characters), got {} bytes",
            what,
            N,
            N * 2,
            bytes.len()
        )
    })
}
