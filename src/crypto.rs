//! Master passphrase hashing.
//!
//! The digest is a plain unsalted SHA-256, hex encoded. Identical passphrases
//! hash identically across installations. This matches the stored
//! `master_password_hash` format and is not a key derivation function.

use sha2::{Digest, Sha256};

pub fn hash_passphrase(passphrase: &str) -> String {
    hex::encode(Sha256::digest(passphrase.as_bytes()))
}

/// Returns true when `passphrase` hashes to `stored_hash`.
///
/// A stored value that is not valid hex never matches.
pub fn verify_passphrase(passphrase: &str, stored_hash: &str) -> bool {
    let expected = match hex::decode(stored_hash.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Stored master password hash is not valid hex: {}", e);
            return false;
        }
    };
    let computed = Sha256::digest(passphrase.as_bytes());
    constant_time_compare(&computed, &expected)
}

fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
