//! Key types for ARADI.

use crate::block::Block;

/// ARADI 256-bit key held as eight 32-bit words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aradi256Key(pub [u32; 8]);

impl From<[u32; 8]> for Aradi256Key {
    fn from(value: [u32; 8]) -> Self {
        Self(value)
    }
}

impl Aradi256Key {
    /// Builds a key from 32 bytes, little-endian within each word.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let mut words = [0u32; 8];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self(words)
    }
}

/// Expanded round keys: one 128-bit key per round plus the final whitening key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 17]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=16).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}
