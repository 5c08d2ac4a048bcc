//! Credential digests.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of `username:password`. The username acts as a
/// per-account salt so equal passwords produce different digests.
#[must_use]
pub fn password_digest(username: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(username.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Whether `password` matches the stored digest for `username`.
#[must_use]
pub fn verify_password(username: &str, password: &str, stored_digest: &str) -> bool {
    password_digest(username, password) == stored_digest
}
