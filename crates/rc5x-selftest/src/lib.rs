//! Deterministic self-test vectors for the RC5-64/33/64 cipher.
//!
//! The harness keeps a rolling ciphertext seed: each iteration reuses the
//! previous ciphertext as the next plaintext, derives a fresh key from it,
//! and records the Setup → Encrypt → Decrypt results. Verification is
//! carried as data so callers decide how to present mismatches.
//!
//! The key derivation exists only to generate reproducible test vectors; it
//! is not a key-derivation function and must not be used as one.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use rc5x_core::{decrypt_block, encrypt_block, expand_key, Block, Rc5Key, KEY_BYTES};

/// One iteration of the self-test chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestVector {
    /// 1-based iteration index.
    pub index: usize,
    /// Key derived from the previous ciphertext.
    pub key: Rc5Key,
    /// Plaintext fed to the cipher (the previous ciphertext).
    pub plaintext: Block,
    /// Ciphertext produced under `key`.
    pub ciphertext: Block,
    /// Result of decrypting `ciphertext` again.
    pub decrypted: Block,
}

impl TestVector {
    /// Returns `true` when the decrypted block equals the plaintext.
    #[inline]
    pub fn is_match(&self) -> bool {
        self.decrypted == self.plaintext
    }
}

/// Derives the next chain key from a ciphertext seed.
///
/// Byte `j` is `seed[0] % (255 - j)`, matching the reference chain; only the
/// first seed word contributes.
pub fn derive_key(seed: &Block) -> Rc5Key {
    let mut key = [0u8; KEY_BYTES];
    for (j, byte) in key.iter_mut().enumerate() {
        *byte = (seed[0] % (255 - j as u64)) as u8;
    }
    Rc5Key(key)
}

/// Runs the chained self-test for the requested number of iterations.
///
/// The seed starts as the all-zero block, so the first vector uses the
/// all-zero key and plaintext and every run of the same length produces the
/// same vectors.
pub fn run_chain(iterations: usize) -> Vec<TestVector> {
    let mut vectors = Vec::with_capacity(iterations);
    let mut seed: Block = [0; 4];

    for index in 1..=iterations {
        let plaintext = seed;
        let key = derive_key(&seed);
        let table = expand_key(&key);
        let ciphertext = encrypt_block(&plaintext, &table);
        let decrypted = decrypt_block(&ciphertext, &table);
        vectors.push(TestVector {
            index,
            key,
            plaintext,
            ciphertext,
            decrypted,
        });
        seed = ciphertext;
    }

    vectors
}
