//! Key types for the RC5-64/33/64 cipher.

use core::fmt;

use crate::cipher::ROUNDS;

/// Number of bytes of secret key material.
pub const KEY_BYTES: usize = 64;

/// Number of words in an expanded round-key table.
pub const TABLE_WORDS: usize = 4 * (ROUNDS + 1);

/// 512-bit secret key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rc5Key(pub [u8; KEY_BYTES]);

impl From<[u8; KEY_BYTES]> for Rc5Key {
    fn from(value: [u8; KEY_BYTES]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Rc5Key {
    type Error = KeyLengthError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEY_BYTES] = value
            .try_into()
            .map_err(|_| KeyLengthError { found: value.len() })?;
        Ok(Self(bytes))
    }
}

/// Error returned when key material is not exactly [`KEY_BYTES`] long.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyLengthError {
    /// Length of the rejected input.
    pub found: usize,
}

impl fmt::Display for KeyLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "key must be exactly {} bytes, got {}",
            KEY_BYTES, self.found
        )
    }
}

impl std::error::Error for KeyLengthError {}

/// Expanded round-key table of [`TABLE_WORDS`] words.
///
/// Produced by [`expand_key`](crate::expand_key) and consumed read-only by
/// encryption and decryption. Each expansion yields a fresh owned table, so
/// contexts with different keys never share state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeyTable(pub [u64; TABLE_WORDS]);

impl RoundKeyTable {
    /// Returns the round word at the requested index (0..=135).
    #[inline]
    pub fn get(&self, index: usize) -> u64 {
        self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_accepts_exact_length() {
        let bytes = vec![0xA5u8; KEY_BYTES];
        let key = Rc5Key::try_from(bytes.as_slice()).expect("64-byte key");
        assert_eq!(key.0[0], 0xA5);
    }

    #[test]
    fn key_rejects_wrong_lengths() {
        for len in [0usize, 1, 16, 32, 63, 65, 128] {
            let bytes = vec![0u8; len];
            let err = Rc5Key::try_from(bytes.as_slice()).unwrap_err();
            assert_eq!(err.found, len);
        }
    }

    #[test]
    fn table_holds_four_words_per_round_plus_whitening() {
        assert_eq!(TABLE_WORDS, 136);
    }
}
