//! Password hashing
//!
//! Passwords are stored as the lowercase hex SHA-256 digest of their UTF-8 bytes,
//! without a salt. Existing accounts were created with this scheme, so login
//! compares digests directly in the store.

use sha2::{Digest, Sha256};

/// Hash a password into its stored form (64 lowercase hex characters)
#[must_use]
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

/// Password service for dependency injection
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordService;

impl PasswordService {
    /// Create a new password service
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a password
    #[must_use]
    pub fn hash(&self, password: &str) -> String {
        hash_password(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_known_value() {
        assert_eq!(
            hash_password("hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_hash_is_deterministic() {
        let hash = hash_password("пароль123");
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, hash_password("пароль123"));
        assert_ne!(hash, hash_password("пароль124"));
    }

    #[test]
    fn test_password_service_matches_free_function() {
        let service = PasswordService::new();
        assert_eq!(service.hash("secret"), hash_password("secret"));
        assert_ne!(service.hash("secret"), service.hash("wrong"));
    }
}
