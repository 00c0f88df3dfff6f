//! Salted SHA-256 digests for account secrets.
//!
//! The raw secret is never stored. Verification re-hashes the candidate with
//! the stored salt and requires the digests to match exactly.

use rand::Rng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

const SALT_LEN: usize = 16;

// Stand-in used when the email is unknown, so a miss costs one hash like a hit.
const ABSENT_SALT: &str = "00000000000000000000000000000000";
const ABSENT_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

pub(crate) struct SecretDigest {
    pub salt: String,
    pub hash: String,
}

impl SecretDigest {
    pub(crate) fn create(secret: &str) -> Self {
        let mut bytes = [0u8; SALT_LEN];
        rand::rng().fill(&mut bytes);
        let salt: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        let hash = salted_sha256(&salt, secret);
        Self { salt, hash }
    }
}

pub(crate) fn verify(secret: &str, salt: &str, expected_hash: &str) -> bool {
    let actual = salted_sha256(salt, secret);
    bool::from(actual.as_bytes().ct_eq(expected_hash.as_bytes()))
}

/// Hash `secret` against a digest nothing can match.
pub(crate) fn verify_absent(secret: &str) -> bool {
    std::hint::black_box(verify(secret, ABSENT_SALT, ABSENT_HASH))
}

fn salted_sha256(salt: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}
