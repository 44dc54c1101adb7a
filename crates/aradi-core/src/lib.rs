//! Reference ARADI implementation (128-bit block, 256-bit key).
//!
//! This crate follows the cipher as published in "The ARADI and LLAMA
//! Low-Latency Cryptography" paper (eprint 2024/1240) and provides:
//! - Key schedule expanding a 256-bit key into 17 round keys.
//! - Single-block encryption and decryption.
//! - Little-endian byte packing for blocks and keys.
//!
//! The cipher is built from bitwise operations and fixed rotations only
//! (no secret-dependent table lookups or branches), but the implementation
//! aims for clarity and testability and should not otherwise be treated as
//! side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod key;
mod round;

pub use crate::block::{block_from_bytes, block_to_bytes, Block};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::key::{Aradi256Key, RoundKeys};
