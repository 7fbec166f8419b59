//! Key schedule and block encryption/decryption.

use crate::block::Block;
use crate::key::{Rc5Key, RoundKeyTable, KEY_BYTES, TABLE_WORDS};
use crate::rotate::{rotl, rotr};

/// Number of cipher rounds.
pub const ROUNDS: usize = 33;

/// Words of packed key material.
const KEY_WORDS: usize = KEY_BYTES / 8;

// Equation Group constants. Q diverges from the canonical odd golden-ratio
// constant 0x9E3779B9 and the priming recurrence subtracts it; both must stay
// exactly as they are for compatible output.
const P: u64 = 0xB7E15163;
const Q: u64 = 0x61C88647;

/// Packs the 64 key bytes into 8 words, most significant byte first.
fn key_into_words(key: &Rc5Key) -> [u64; KEY_WORDS] {
    // Every word is zeroed up front; correctness must not hinge on the
    // top-byte-first traversal order.
    let mut words = [0u64; KEY_WORDS];
    for i in (0..KEY_BYTES).rev() {
        words[i / 8] = (words[i / 8] << 8) + u64::from(key.0[i]);
    }
    words
}

/// Fills the table with the constant-driven recurrence, before key mixing.
fn prime_table() -> [u64; TABLE_WORDS] {
    let mut table = [0u64; TABLE_WORDS];
    table[0] = P;
    for i in 1..TABLE_WORDS {
        table[i] = table[i - 1].wrapping_sub(Q);
    }
    table
}

/// Expands a 512-bit key into the 136-word round-key table.
pub fn expand_key(key: &Rc5Key) -> RoundKeyTable {
    let mut words = key_into_words(key);
    let mut table = prime_table();

    let (mut a, mut b) = (0u64, 0u64);
    let (mut i, mut j) = (0usize, 0usize);
    for _ in 0..3 * TABLE_WORDS {
        a = rotl(table[i].wrapping_add(a).wrapping_add(b), 3);
        table[i] = a;
        // The rotation amount is the running value A + B, reduced modulo the
        // word width inside rotl.
        b = rotl(words[j].wrapping_add(a).wrapping_add(b), a.wrapping_add(b));
        words[j] = b;
        i = (i + 1) % TABLE_WORDS;
        j = (j + 1) % KEY_WORDS;
    }

    RoundKeyTable(table)
}

/// Encrypts a single four-word block with a pre-expanded round-key table.
///
/// The block runs as two independent two-word pipelines, AB and CD, that
/// share the table but use disjoint word slices. Update order within a round
/// is part of the contract: A is rewritten using the old B, then B using the
/// new A, then C and D likewise.
pub fn encrypt_block(block: &Block, table: &RoundKeyTable) -> Block {
    let s = &table.0;
    let mut a = block[0].wrapping_add(s[0]);
    let mut b = block[1].wrapping_add(s[1]);
    let mut c = block[2].wrapping_add(s[2]);
    let mut d = block[3].wrapping_add(s[3]);

    for i in 1..=ROUNDS {
        a = rotl(a ^ b, b).wrapping_add(s[2 * i]);
        b = rotl(b ^ a, a).wrapping_add(s[2 * i + 1]);
        c = rotl(c ^ d, d).wrapping_add(s[2 * i + 2]);
        d = rotl(d ^ c, c).wrapping_add(s[2 * i + 3]);
    }

    [a, b, c, d]
}

/// Decrypts a single four-word block with a pre-expanded round-key table.
///
/// Rounds run from 33 down to 1 and registers are rewritten in D, C, B, A
/// order, mirroring encryption in reverse.
pub fn decrypt_block(block: &Block, table: &RoundKeyTable) -> Block {
    let s = &table.0;
    let mut a = block[0];
    let mut b = block[1];
    let mut c = block[2];
    let mut d = block[3];

    for i in (1..=ROUNDS).rev() {
        d = rotr(d.wrapping_sub(s[2 * i + 3]), c) ^ c;
        c = rotr(c.wrapping_sub(s[2 * i + 2]), d) ^ d;
        b = rotr(b.wrapping_sub(s[2 * i + 1]), a) ^ a;
        a = rotr(a.wrapping_sub(s[2 * i]), b) ^ b;
    }

    [
        a.wrapping_sub(s[0]),
        b.wrapping_sub(s[1]),
        c.wrapping_sub(s[2]),
        d.wrapping_sub(s[3]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    const ZERO_KEY: Rc5Key = Rc5Key([0u8; KEY_BYTES]);
    const ZERO_BLOCK: Block = [0u64; 4];

    // Captured from a verified run; pins the variant constants and the
    // subtraction priming against regressions.
    const GOLDEN_CIPHERTEXT: Block = [
        0xDF0DCC603CC29004,
        0x2FF25DB61E07BE3B,
        0x8B50479C06CC7A2D,
        0xF2337A4D905CEBA1,
    ];

    #[test]
    fn primed_table_matches_oracle_values() {
        let table = prime_table();
        assert_eq!(table[0], 0x00000000B7E15163);
        assert_eq!(table[1], 0x000000005618CB1C);
        assert_eq!(table[2], 0xFFFFFFFFF45044D5);
        assert_eq!(table[TABLE_WORDS - 1], 0xFFFFFFCD272281F2);
    }

    #[test]
    fn expanded_table_matches_oracle_values() {
        let table = expand_key(&ZERO_KEY);
        assert_eq!(table.get(0), 0x6F3A82D88182BFC4);
        assert_eq!(table.get(1), 0xBE1E5790335F5929);
        assert_eq!(table.get(2), 0xB2DCBEF58FA51C00);
        assert_eq!(table.get(3), 0x88F1BBA3EF0CDCC3);
    }

    #[test]
    fn encrypt_matches_golden_vector() {
        let table = expand_key(&ZERO_KEY);
        assert_eq!(encrypt_block(&ZERO_BLOCK, &table), GOLDEN_CIPHERTEXT);
    }

    #[test]
    fn decrypt_matches_golden_vector() {
        let table = expand_key(&ZERO_KEY);
        assert_eq!(decrypt_block(&GOLDEN_CIPHERTEXT, &table), ZERO_BLOCK);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; KEY_BYTES];
            rng.fill_bytes(&mut key_bytes);
            let key = Rc5Key::from(key_bytes);
            let table = expand_key(&key);
            let block = [
                rng.next_u64(),
                rng.next_u64(),
                rng.next_u64(),
                rng.next_u64(),
            ];
            let pt = decrypt_block(&encrypt_block(&block, &table), &table);
            assert_eq!(pt, block);
        }
    }

    #[test]
    fn single_bit_difference_changes_ciphertext() {
        let table = expand_key(&ZERO_KEY);
        let flipped: Block = [1, 0, 0, 0];
        assert_ne!(
            encrypt_block(&flipped, &table),
            encrypt_block(&ZERO_BLOCK, &table)
        );
    }

    #[test]
    fn fresh_tables_for_equal_keys_are_identical() {
        let mut rng = rand::thread_rng();
        let mut key_bytes = [0u8; KEY_BYTES];
        rng.fill_bytes(&mut key_bytes);
        let key = Rc5Key::from(key_bytes);
        assert_eq!(expand_key(&key), expand_key(&key));
    }
}
