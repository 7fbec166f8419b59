//! Block representation helpers.

/// Native cipher word.
pub type Word = u64;

/// Number of words in a block.
pub const BLOCK_WORDS: usize = 4;

/// Number of bytes in a block.
pub const BLOCK_BYTES: usize = BLOCK_WORDS * core::mem::size_of::<Word>();

// The cipher is only defined for an 8-byte word.
const _: () = assert!(core::mem::size_of::<Word>() == 8);

/// Cipher block of four 64-bit words (256 bits).
///
/// Used for both plaintext and ciphertext; the interpretation is purely
/// positional.
pub type Block = [Word; BLOCK_WORDS];

/// Builds a block from 32 bytes, most significant byte of each word first.
#[inline]
pub fn block_from_bytes(bytes: &[u8; BLOCK_BYTES]) -> Block {
    let mut block = [0u64; BLOCK_WORDS];
    for (word, chunk) in block.iter_mut().zip(bytes.chunks_exact(8)) {
        *word = u64::from_be_bytes(chunk.try_into().expect("chunk length is eight"));
    }
    block
}

/// Serializes a block to 32 bytes, most significant byte of each word first.
#[inline]
pub fn block_to_bytes(block: &Block) -> [u8; BLOCK_BYTES] {
    let mut bytes = [0u8; BLOCK_BYTES];
    for (chunk, word) in bytes.chunks_exact_mut(8).zip(block.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_conversion_round_trips() {
        let block: Block = [
            0x0123456789ABCDEF,
            0xFEDCBA9876543210,
            0x0000000000000001,
            0x8000000000000000,
        ];
        let bytes = block_to_bytes(&block);
        assert_eq!(bytes[0], 0x01);
        assert_eq!(bytes[7], 0xEF);
        assert_eq!(block_from_bytes(&bytes), block);
    }
}
