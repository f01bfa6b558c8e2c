//! RS256 key management for JWT signing and verification.
//!
//! Keys are loaded once at process start and shared read-only for the
//! process lifetime. A load failure is fatal to startup, never a
//! per-request condition.

use std::fs;
use std::path::{Path, PathBuf};

use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::errors::{DomainError, TokenError};

/// Holder for the RS256 key pair used in JWT operations
#[derive(Clone)]
pub struct KeyStore {
    /// Private key for signing JWTs
    encoding_key: EncodingKey,
    /// Public key for verifying JWTs
    decoding_key: DecodingKey,
    /// Path to private key file
    private_key_path: PathBuf,
    /// Path to public key file
    public_key_path: PathBuf,
}

impl std::fmt::Debug for KeyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyStore")
            .field("private_key_path", &self.private_key_path)
            .field("public_key_path", &self.public_key_path)
            .finish()
    }
}

impl KeyStore {
    /// Loads a key pair from PEM files
    ///
    /// # Arguments
    ///
    /// * `private_key_path` - Path to the PEM-encoded private key file
    /// * `public_key_path` - Path to the PEM-encoded public key file
    ///
    /// # Returns
    ///
    /// * `Ok(KeyStore)` - Keys loaded and parsed
    /// * `Err(DomainError)` - Either file missing, unreadable, or not a
    ///   valid RSA PEM
    pub fn from_files<P: AsRef<Path>>(
        private_key_path: P,
        public_key_path: P,
    ) -> Result<Self, DomainError> {
        let private_key_path = private_key_path.as_ref().to_path_buf();
        let public_key_path = public_key_path.as_ref().to_path_buf();

        let private_key_pem = fs::read(&private_key_path).map_err(|e| {
            DomainError::Token(TokenError::KeyLoad {
                message: format!("Failed to read private key: {}", e),
            })
        })?;
        let public_key_pem = fs::read(&public_key_path).map_err(|e| {
            DomainError::Token(TokenError::KeyLoad {
                message: format!("Failed to read public key: {}", e),
            })
        })?;

        let mut store = Self::from_pem(&private_key_pem, &public_key_pem)?;
        store.private_key_path = private_key_path;
        store.public_key_path = public_key_path;
        Ok(store)
    }

    /// Builds a key store from in-memory PEM bytes (tests, embedded keys)
    ///
    /// # Returns
    ///
    /// * `Ok(KeyStore)` - Keys parsed successfully
    /// * `Err(DomainError)` - Invalid key format
    pub fn from_pem(private_key_pem: &[u8], public_key_pem: &[u8]) -> Result<Self, DomainError> {
        let encoding_key = EncodingKey::from_rsa_pem(private_key_pem).map_err(|e| {
            DomainError::Token(TokenError::KeyLoad {
                message: format!("Invalid private key format: {}", e),
            })
        })?;

        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem).map_err(|e| {
            DomainError::Token(TokenError::KeyLoad {
                message: format!("Invalid public key format: {}", e),
            })
        })?;

        Ok(Self {
            encoding_key,
            decoding_key,
            private_key_path: PathBuf::from("memory"),
            public_key_path: PathBuf::from("memory"),
        })
    }

    /// Returns the encoding key for signing JWTs
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying JWTs
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    /// Returns the paths the keys were loaded from
    pub fn key_paths(&self) -> (&Path, &Path) {
        (&self.private_key_path, &self.public_key_path)
    }
}
