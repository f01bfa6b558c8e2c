//! Signing and validation of session tokens.
//!
//! One codec instance serves both access and refresh tokens; the two differ
//! only in validity window, which the claims carry. Refresh tokens get the
//! expiry-ignoring decode because their authoritative expiry lives in the
//! persisted record, not in the token body.

use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::key_store::KeyStore;

/// Encoder/validator for RS256 session tokens
#[derive(Debug, Clone)]
pub struct TokenCodec {
    keys: KeyStore,
    /// Full validation: signature, issuer, audience, expiry
    validation: Validation,
    /// Same checks with expiry skipped, for refresh token processing
    lenient_validation: Validation,
}

impl TokenCodec {
    /// Creates a codec bound to a key pair and a fixed issuer/audience
    pub fn new(keys: KeyStore, issuer: &str, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.validate_exp = true;

        let mut lenient_validation = validation.clone();
        lenient_validation.validate_exp = false;

        Self {
            keys,
            validation,
            lenient_validation,
        }
    }

    /// Signs a claims payload into a token string
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token
    /// * `Err(DomainError)` - Signing failed
    pub fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::RS256);
        encode(&header, claims, self.keys.encoding_key())
            .map_err(|_| DomainError::Token(TokenError::SigningFailed))
    }

    /// Verifies a token's signature and expiry and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature valid and not expired
    /// * `Err(TokenError::Expired)` - Signature valid but expiry passed
    /// * `Err(TokenError::Invalid)` - Bad signature, wrong issuer/audience,
    ///   or malformed input
    pub fn validate(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, self.keys.decoding_key(), &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::Expired),
                _ => DomainError::Token(TokenError::Invalid),
            })
    }

    /// Verifies a token's signature only, ignoring its embedded expiry
    ///
    /// Used exclusively when processing refresh tokens: the persisted
    /// record decides whether the session is still alive, and this lets the
    /// subject be read out of the token body regardless of its own clock.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature valid
    /// * `Err(TokenError::Invalid)` - Bad signature or malformed input
    pub fn decode_ignoring_expiry(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, self.keys.decoding_key(), &self.lenient_validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::Token(TokenError::Invalid))
    }
}
