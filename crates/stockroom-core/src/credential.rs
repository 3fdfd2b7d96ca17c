//! # Credential Digest
//!
//! Single-pass credential digest shared by both front ends.
//!
//! The stored credential is `hex(sha256(password))`. Both the desktop
//! client and the web dashboard authenticate against the same column, so
//! the digest lives here in core where each can reach it without pulling
//! in the other's stack.
//!
//! Hardening (salting, stretching, lockout) is explicitly out of scope;
//! this is an equality check over a fixed digest, nothing more.

use sha2::{Digest, Sha256};

/// Digests a raw password into the stored credential form.
pub fn digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compares a raw password against a stored digest.
pub fn verify(password: &str, stored: &str) -> bool {
    // Both sides are fixed-length hex of the same hash, so a plain
    // comparison is an equality check over the full digest.
    digest(password) == stored
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_stable_hex_sha256() {
        // Known SHA-256 of "admin"
        assert_eq!(
            digest("admin"),
            "8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918"
        );
    }

    #[test]
    fn test_verify_matches_only_exact_password() {
        let stored = digest("secret");
        assert!(verify("secret", &stored));
        assert!(!verify("Secret", &stored));
        assert!(!verify("", &stored));
    }
}
