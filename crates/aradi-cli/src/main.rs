//! Command-line driver for `aradi-core`.
//!
//! This binary is a thin external caller: it feeds hex-encoded blocks and
//! keys to the cipher, prints results, and checks the published test vector.

#![forbid(unsafe_code)]

use aradi_core::{
    block_from_bytes, block_to_bytes, decrypt_block, encrypt_block, expand_key, Aradi256Key, Block,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// ARADI block cipher CLI.
#[derive(Parser)]
#[command(name = "aradi", version, about = "ARADI block cipher (128-bit block, 256-bit key)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a single block.
    Enc {
        /// 256-bit key as 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// 128-bit plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt a single block.
    Dec {
        /// 256-bit key as 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// 128-bit ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print the 17 expanded round keys for a key.
    Keys {
        /// 256-bit key as 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Run the known-answer test from the ARADI paper.
    Kat,
    /// Encrypt and decrypt a random block, verifying the round trip.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc { key_hex, block_hex } => cmd_enc(&key_hex, &block_hex),
        Commands::Dec { key_hex, block_hex } => cmd_dec(&key_hex, &block_hex),
        Commands::Keys { key_hex } => cmd_keys(&key_hex),
        Commands::Kat => cmd_kat(),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_enc(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let round_keys = expand_key(&key);
    let ct = encrypt_block(&block, &round_keys);
    println!("{}", hex::encode(block_to_bytes(&ct)));
    Ok(())
}

fn cmd_dec(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let round_keys = expand_key(&key);
    let pt = decrypt_block(&block, &round_keys);
    println!("{}", hex::encode(block_to_bytes(&pt)));
    Ok(())
}

fn cmd_keys(key_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let round_keys = expand_key(&key);
    for (i, rk) in round_keys.0.iter().enumerate() {
        println!(
            "key[{i:2}]: {:08x} {:08x} {:08x} {:08x}",
            rk[0], rk[1], rk[2], rk[3]
        );
    }
    Ok(())
}

fn cmd_kat() -> Result<()> {
    // Key bytes 0..31 and an all-zero plaintext, from the ARADI paper.
    let mut key_bytes = [0u8; 32];
    for (i, b) in key_bytes.iter_mut().enumerate() {
        *b = i as u8;
    }
    let key = Aradi256Key::from_bytes(&key_bytes);
    let plaintext: Block = [0; 4];
    let expected: Block = [0x3f09abf4, 0x00e3bd74, 0x03260def, 0xb7c53912];

    let round_keys = expand_key(&key);
    let ct = encrypt_block(&plaintext, &round_keys);
    println!("input:    {}", format_words(&plaintext));
    println!("output:   {}", format_words(&ct));
    println!("expected: {}", format_words(&expected));
    if ct != expected {
        bail!("ciphertext does not match the published vector");
    }

    let pt = decrypt_block(&ct, &round_keys);
    println!("decrypted: {}", format_words(&pt));
    if pt != plaintext {
        bail!("decryption failed to recover the plaintext");
    }
    println!("known-answer test passed");
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let key = Aradi256Key::from(rng.gen::<[u32; 8]>());
    let block: Block = rng.gen();

    let round_keys = expand_key(&key);
    let ct = encrypt_block(&block, &round_keys);
    let pt = decrypt_block(&ct, &round_keys);

    println!("plaintext:  {}", hex::encode(block_to_bytes(&block)));
    println!("ciphertext: {}", hex::encode(block_to_bytes(&ct)));
    println!("decrypted:  {}", hex::encode(block_to_bytes(&pt)));
    if pt != block {
        bail!("demo round trip failed");
    }
    Ok(())
}

fn format_words(block: &Block) -> String {
    format!(
        "0x{:08x} 0x{:08x} 0x{:08x} 0x{:08x}",
        block[0], block[1], block[2], block[3]
    )
}

fn parse_key_hex(hex_str: &str) -> Result<Aradi256Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if bytes.len() != 32 {
        bail!("ARADI key must be 32 bytes (64 hex characters)");
    }
    let mut key = [0u8; 32];
    key.copy_from_slice(&bytes);
    Ok(Aradi256Key::from_bytes(&key))
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    if bytes.len() != 16 {
        bail!("ARADI block must be 16 bytes (32 hex characters)");
    }
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    Ok(block_from_bytes(&block))
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
