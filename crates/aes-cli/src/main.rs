//! Command-line interface for the from-scratch AES core.

#![forbid(unsafe_code)]

mod encoding;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use aes_core::{
    expand_key, trace_decrypt, trace_encrypt, Aes, Block, Iv, Key, KeySize, StateGrid, Trace,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{debug, info, warn, LevelFilter};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::encoding::{parse_fixed_hex, Encoding};

/// Fixed AES-256 key used when none is supplied. Demonstration only.
const DEMO_KEY: &[u8; 32] = b"01234567890123456789012345678901";
/// Fixed IV paired with [`DEMO_KEY`].
const DEMO_IV: &[u8; 16] = b"0123456789012345";

/// AES primer CLI.
#[derive(Parser)]
#[command(
    name = "aes-lab",
    version,
    author,
    about = "Encrypt, decrypt and trace AES-128/192/256 (CBC, PKCS#7)"
)]
struct Cli {
    /// Enable debug logging.
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message with AES-CBC.
    Enc {
        /// Key as 32, 48 or 64 hex characters (defaults to the demo key).
        #[arg(long, value_name = "HEX")]
        key_hex: Option<String>,
        /// IV as 32 hex characters (defaults to the demo IV).
        #[arg(long, value_name = "HEX")]
        iv_hex: Option<String>,
        /// Plaintext given inline.
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        text: Option<String>,
        /// Plaintext file.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Ciphertext encoding.
        #[arg(long, value_enum, default_value_t = Encoding::Hex)]
        format: Encoding,
        /// Write ciphertext here instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Decrypt an AES-CBC message.
    Dec {
        /// Key as 32, 48 or 64 hex characters (defaults to the demo key).
        #[arg(long, value_name = "HEX")]
        key_hex: Option<String>,
        /// IV as 32 hex characters (defaults to the demo IV).
        #[arg(long, value_name = "HEX")]
        iv_hex: Option<String>,
        /// Encoded ciphertext given inline.
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        data: Option<String>,
        /// Ciphertext file.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Ciphertext encoding.
        #[arg(long, value_enum, default_value_t = Encoding::Hex)]
        format: Encoding,
        /// Write plaintext here instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print every round key of a key schedule.
    Schedule {
        /// Key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Show the state after every stage of one block transform.
    Trace {
        /// Key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Trace the inverse cipher instead.
        #[arg(long, default_value_t = false)]
        decrypt: bool,
        /// Emit the trace as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run a local demo: random key + IV, encrypt a message, decrypt it back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Key size for the generated key.
        #[arg(long, value_enum, default_value_t = KeyBits::B256)]
        key_bits: KeyBits,
        /// Message to encrypt.
        #[arg(long, default_value = "The quick brown fox jumps over the lazy dog")]
        message: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum KeyBits {
    #[value(name = "128")]
    B128,
    #[value(name = "192")]
    B192,
    #[value(name = "256")]
    B256,
}

impl From<KeyBits> for KeySize {
    fn from(bits: KeyBits) -> Self {
        match bits {
            KeyBits::B128 => KeySize::Aes128,
            KeyBits::B192 => KeySize::Aes192,
            KeyBits::B256 => KeySize::Aes256,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    match cli.command {
        Commands::Enc {
            key_hex,
            iv_hex,
            text,
            input,
            format,
            output,
        } => {
            let plaintext = match (text, input) {
                (Some(text), _) => text.into_bytes(),
                (None, Some(path)) => read_file(&path)?,
                (None, None) => bail!("either --text or --input is required"),
            };
            cmd_enc(
                key_hex.as_deref(),
                iv_hex.as_deref(),
                &plaintext,
                format,
                output.as_deref(),
            )
        }
        Commands::Dec {
            key_hex,
            iv_hex,
            data,
            input,
            format,
            output,
        } => {
            let encoded = match (data, input) {
                (Some(data), _) => data.into_bytes(),
                (None, Some(path)) => read_file(&path)?,
                (None, None) => bail!("either --data or --input is required"),
            };
            cmd_dec(
                key_hex.as_deref(),
                iv_hex.as_deref(),
                &encoded,
                format,
                output.as_deref(),
            )
        }
        Commands::Schedule { key_hex } => cmd_schedule(&key_hex),
        Commands::Trace {
            key_hex,
            block_hex,
            decrypt,
            json,
        } => cmd_trace(&key_hex, &block_hex, decrypt, json),
        Commands::Demo {
            seed,
            key_bits,
            message,
        } => cmd_demo(seed, key_bits.into(), &message),
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn cmd_enc(
    key_hex: Option<&str>,
    iv_hex: Option<&str>,
    plaintext: &[u8],
    format: Encoding,
    output: Option<&Path>,
) -> Result<()> {
    let cipher = Aes::from_key(&resolve_key(key_hex)?);
    let iv = resolve_iv(iv_hex)?;
    let ciphertext = cipher.encrypt_message(plaintext, &iv);
    info!(
        "encrypted {} bytes with {}-CBC into {} bytes",
        plaintext.len(),
        cipher.key_size(),
        ciphertext.len()
    );
    emit(&format.encode(&ciphertext), format.is_text(), output)
}

fn cmd_dec(
    key_hex: Option<&str>,
    iv_hex: Option<&str>,
    encoded: &[u8],
    format: Encoding,
    output: Option<&Path>,
) -> Result<()> {
    let cipher = Aes::from_key(&resolve_key(key_hex)?);
    let iv = resolve_iv(iv_hex)?;
    let ciphertext = format.decode(encoded)?;
    let plaintext = cipher
        .decrypt_message(&ciphertext, &iv)
        .context("decrypt message")?;
    info!(
        "decrypted {} bytes with {}-CBC",
        plaintext.len(),
        cipher.key_size()
    );
    let printable = output.is_none() && std::str::from_utf8(&plaintext).is_ok();
    emit(&plaintext, printable, output)
}

fn cmd_schedule(key_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let schedule = expand_key(key.as_bytes()).context("expand key")?;
    println!("{} key schedule ({} round keys)", schedule.key_size(), schedule.len());
    for (round, round_key) in schedule.iter().enumerate() {
        println!("round {round:2}: {}", hex::encode(round_key));
    }
    Ok(())
}

fn cmd_trace(key_hex: &str, block_hex: &str, decrypt: bool, json: bool) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block: Block = parse_fixed_hex("block", block_hex)?;
    let schedule = expand_key(key.as_bytes()).context("expand key")?;
    let trace = if decrypt {
        trace_decrypt(&block, &schedule)
    } else {
        trace_encrypt(&block, &schedule)
    };
    debug!("traced {} stages", trace.steps.len());

    if json {
        let rendered = serde_json::to_string_pretty(&trace).context("serialize trace")?;
        println!("{rendered}");
    } else {
        print!("{}", render_trace(&trace));
    }
    Ok(())
}

fn render_trace(trace: &Trace) -> String {
    let mut out = String::new();
    for step in &trace.steps {
        out.push_str(&format!(
            "round {:2} {:<13} {}\n{}\n\n",
            step.round,
            step.stage,
            hex::encode(step.state),
            StateGrid(&step.state)
        ));
    }
    if let Some(output) = trace.output() {
        out.push_str(&format!("output: {}\n", hex::encode(output)));
    }
    out
}

fn cmd_demo(seed: Option<u64>, size: KeySize, message: &str) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = vec![0u8; size.key_len()];
    rng.fill_bytes(&mut key_bytes);
    let mut iv_bytes = [0u8; 16];
    rng.fill_bytes(&mut iv_bytes);

    let cipher = Aes::new(&key_bytes).context("build cipher")?;
    let iv = Iv::from(iv_bytes);

    let ciphertext = cipher.encrypt_message(message.as_bytes(), &iv);
    let decrypted = cipher
        .decrypt_message(&ciphertext, &iv)
        .context("decrypt demo ciphertext")?;

    println!("demo variant: {}-CBC", size);
    println!("key: {}", hex::encode(&key_bytes));
    println!("iv: {}", hex::encode(iv_bytes));
    println!("plaintext: {}", message);
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", String::from_utf8_lossy(&decrypted));
    if decrypted != message.as_bytes() {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Key::new(&bytes).context("AES key must be 16, 24 or 32 bytes (32, 48 or 64 hex characters)")
}

fn resolve_key(key_hex: Option<&str>) -> Result<Key> {
    match key_hex {
        Some(hex_str) => parse_key_hex(hex_str),
        None => {
            warn!("no --key-hex given; using the built-in demonstration key");
            Ok(Key::from(*DEMO_KEY))
        }
    }
}

fn resolve_iv(iv_hex: Option<&str>) -> Result<Iv> {
    match iv_hex {
        Some(hex_str) => Ok(Iv::from(parse_fixed_hex::<16>("IV", hex_str)?)),
        None => {
            warn!("no --iv-hex given; using the built-in demonstration IV");
            Ok(Iv::from(*DEMO_IV))
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

fn emit(bytes: &[u8], text: bool, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
            debug!("wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).context("write stdout")?;
            if text {
                writeln!(stdout).context("write stdout")?;
            }
        }
    }
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => ChaCha20Rng::from_entropy(),
    }
}
