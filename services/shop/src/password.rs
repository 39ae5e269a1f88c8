//! Password hashing and verification
//!
//! Credentials are stored as Argon2id PHC strings: a fresh random salt is
//! generated for every hash call and the salt travels inside the encoded
//! string, so verification only needs the candidate password and the stored
//! value.

use anyhow::Result;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};

/// Hash a password with a freshly generated random salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against its stored hash
///
/// Fails closed: a malformed or unparsable stored hash yields `false`
/// rather than an error.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("secret1").unwrap();
        assert!(verify_password("secret1", &hash));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("secret1").unwrap();
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let first = hash_password("secret1").unwrap();
        let second = hash_password("secret1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_stored_hash_fails_closed() {
        assert!(!verify_password("secret1", ""));
        assert!(!verify_password("secret1", "not-a-hash"));
        assert!(!verify_password("secret1", "deadbeef$cafebabe"));
    }
}
