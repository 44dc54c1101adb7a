//! Block representation helpers.

/// ARADI block of four 32-bit words (128 bits).
pub type Block = [u32; 4];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Unpacks 16 bytes into a block, little-endian within each word.
#[inline]
pub fn block_from_bytes(bytes: &[u8; 16]) -> Block {
    let mut block = [0u32; 4];
    for (word, chunk) in block.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    block
}

/// Packs a block into 16 bytes, little-endian within each word.
#[inline]
pub fn block_to_bytes(block: &Block) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(block.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    bytes
}
