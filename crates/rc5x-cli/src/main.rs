//! Command-line interface for the RC5-64/33/64 cipher.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rc5x_core::{
    block_from_bytes, block_to_bytes, decrypt_block, encrypt_block, expand_key, Block, Rc5Key,
    BLOCK_BYTES, KEY_BYTES,
};
use rc5x_selftest::run_chain;

/// RC5-64/33/64 CLI.
#[derive(Parser)]
#[command(
    name = "rc5x",
    version,
    author,
    about = "RC5-64/33/64 block cipher (512-bit key, 256-bit block)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the chained self-test and print each vector.
    Selftest {
        /// Number of chained iterations.
        #[arg(long, default_value_t = 5)]
        iterations: usize,
    },
    /// Encrypt a single 32-byte block.
    Enc {
        /// Key as 128 hex characters (64 bytes).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 64 hex characters (32 bytes).
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt a single 32-byte block.
    Dec {
        /// Key as 128 hex characters (64 bytes).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 64 hex characters (32 bytes).
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Verify encrypt/decrypt round-trips for random samples.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 4)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Selftest { iterations } => cmd_selftest(iterations),
        Commands::Enc { key_hex, block_hex } => cmd_enc(&key_hex, &block_hex),
        Commands::Dec { key_hex, block_hex } => cmd_dec(&key_hex, &block_hex),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
    }
}

fn cmd_selftest(iterations: usize) -> Result<()> {
    println!("RC5-64/33/64 self-test (512-bit key, 256-bit block):");
    // Mismatches are reported per vector; the self-test itself always
    // finishes with a success status.
    for vector in run_chain(iterations) {
        println!();
        println!("{}. key = {}", vector.index, hex::encode_upper(vector.key.0));
        println!(
            "   P: {} =>  C: {} => dP: {}",
            format_block(&vector.plaintext),
            format_block(&vector.ciphertext),
            format_block(&vector.decrypted)
        );
        if !vector.is_match() {
            println!(
                "   DECRYPT ERROR: {} != {}",
                format_block(&vector.plaintext),
                format_block(&vector.decrypted)
            );
        }
    }
    Ok(())
}

fn cmd_enc(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let table = expand_key(&key);
    let ciphertext = encrypt_block(&block, &table);
    println!("{}", hex::encode(block_to_bytes(&ciphertext)));
    Ok(())
}

fn cmd_dec(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let table = expand_key(&key);
    let plaintext = decrypt_block(&block, &table);
    println!("{}", hex::encode(block_to_bytes(&plaintext)));
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    for _ in 0..samples {
        let mut key_bytes = [0u8; KEY_BYTES];
        rng.fill_bytes(&mut key_bytes);
        let table = expand_key(&Rc5Key::from(key_bytes));
        let block = [
            rng.next_u64(),
            rng.next_u64(),
            rng.next_u64(),
            rng.next_u64(),
        ];
        let decrypted = decrypt_block(&encrypt_block(&block, &table), &table);
        if decrypted != block {
            bail!("round-trip mismatch for key {}", hex::encode(key_bytes));
        }
    }
    println!("verified {samples} random round-trips");
    Ok(())
}

fn format_block(block: &Block) -> String {
    block
        .iter()
        .map(|word| format!("{word:016X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_key_hex(hex_str: &str) -> Result<Rc5Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if bytes.len() != KEY_BYTES {
        bail!(
            "key must be {} bytes ({} hex characters)",
            KEY_BYTES,
            2 * KEY_BYTES
        );
    }
    Rc5Key::try_from(bytes.as_slice()).context("construct key")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    if bytes.len() != BLOCK_BYTES {
        bail!(
            "block must be {} bytes ({} hex characters)",
            BLOCK_BYTES,
            2 * BLOCK_BYTES
        );
    }
    let mut fixed = [0u8; BLOCK_BYTES];
    fixed.copy_from_slice(&bytes);
    Ok(block_from_bytes(&fixed))
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
