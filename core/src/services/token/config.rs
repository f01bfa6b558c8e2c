//! Configuration for token issuance.

use crate::domain::entities::token::{
    ACCESS_TOKEN_VALIDITY_SECS, REFRESH_TOKEN_VALIDITY_SECS, TOKEN_AUDIENCE, TOKEN_ISSUER,
};

/// Configuration for token issuance and validation
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Issuer claim stamped into every token
    pub issuer: String,
    /// Audience claim stamped into every token
    pub audience: String,
    /// Access token validity window in seconds
    pub access_token_validity_secs: i64,
    /// Refresh token validity window in seconds
    pub refresh_token_validity_secs: i64,
    /// Path to the PEM-encoded private key file
    pub private_key_path: String,
    /// Path to the PEM-encoded public key file
    pub public_key_path: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            issuer: TOKEN_ISSUER.to_string(),
            audience: TOKEN_AUDIENCE.to_string(),
            access_token_validity_secs: ACCESS_TOKEN_VALIDITY_SECS,
            refresh_token_validity_secs: REFRESH_TOKEN_VALIDITY_SECS,
            private_key_path: "keys/private.pem".to_string(),
            public_key_path: "keys/public.pem".to_string(),
        }
    }
}

impl TokenConfig {
    /// Creates config from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            issuer: std::env::var("TOKEN_ISSUER").unwrap_or(defaults.issuer),
            audience: std::env::var("TOKEN_AUDIENCE").unwrap_or(defaults.audience),
            access_token_validity_secs: std::env::var("ACCESS_TOKEN_VALIDITY_SEC")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_validity_secs),
            refresh_token_validity_secs: std::env::var("REFRESH_TOKEN_VALIDITY_SEC")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_validity_secs),
            private_key_path: std::env::var("JWT_PRIVATE_KEY_PATH")
                .unwrap_or(defaults.private_key_path),
            public_key_path: std::env::var("JWT_PUBLIC_KEY_PATH")
                .unwrap_or(defaults.public_key_path),
        }
    }
}
