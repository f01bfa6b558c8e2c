//! Credential verification against stored salted hashes.
//!
//! The stored hash is always `bcrypt(raw_password + "." + salt)`. The salt
//! is generated once per account creation, never per login. Comparison goes
//! through bcrypt's own verify so no raw string equality is ever involved.

use rand::Rng;

use crate::errors::DomainError;

/// Bytes of entropy in a freshly generated salt
const SALT_BYTES: usize = 16;

/// Bcrypt work factor for new hashes
const BCRYPT_COST: u32 = 10;

/// Checks a presented password against a stored hash and salt
///
/// Returns `false` on mismatch or on a malformed stored hash; a lookup that
/// reaches this point never errors.
pub fn verify_password(raw_password: &str, stored_hash: &str, salt: &str) -> bool {
    let salted = format!("{}.{}", raw_password, salt);
    bcrypt::verify(salted, stored_hash).unwrap_or(false)
}

/// Hashes a password with a fresh salt, as done at account creation
///
/// # Returns
///
/// * `Ok((hash, salt))` - The bcrypt hash and the hex salt that was mixed in
/// * `Err(DomainError)` - Hashing failed
pub fn hash_password(raw_password: &str) -> Result<(String, String), DomainError> {
    let mut bytes = [0u8; SALT_BYTES];
    rand::thread_rng().fill(&mut bytes[..]);
    let salt = hex::encode(bytes);

    let hash = bcrypt::hash(format!("{}.{}", raw_password, salt), BCRYPT_COST).map_err(|e| {
        DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        }
    })?;

    Ok((hash, salt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_accepts_matching_password() {
        let (hash, salt) = hash_password("correct horse").unwrap();

        assert!(verify_password("correct horse", &hash, &salt));
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let (hash, salt) = hash_password("correct horse").unwrap();

        assert!(!verify_password("battery staple", &hash, &salt));
    }

    #[test]
    fn test_verify_rejects_wrong_salt() {
        let (hash, _) = hash_password("correct horse").unwrap();

        assert!(!verify_password("correct horse", &hash, "deadbeef"));
    }

    #[test]
    fn test_verify_tolerates_malformed_hash() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash", "deadbeef"));
    }

    #[test]
    fn test_salts_are_fresh_per_creation() {
        let (_, salt_a) = hash_password("pw").unwrap();
        let (_, salt_b) = hash_password("pw").unwrap();

        assert_ne!(salt_a, salt_b);
        assert_eq!(salt_a.len(), SALT_BYTES * 2);
    }
}
