//! Domain-specific error types for authentication and token management.
//!
//! Client-facing messages are the `Display` output of each variant and stay
//! deliberately generic; the `log` fields carry the root cause for
//! server-side logging only and must never reach a response body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Login failure. The message is identical whether the account does not
    /// exist or the password is wrong, to avoid account enumeration.
    #[error("Invalid username or password")]
    InvalidCredentials {
        /// Root cause, server-side only
        log: &'static str,
    },

    /// Refresh, logout, or middleware failure
    #[error("Please authenticate")]
    Unauthorized {
        /// Root cause, server-side only
        log: String,
    },
}

impl AuthError {
    /// Generic login failure with a server-side root cause
    pub fn invalid_credentials(log: &'static str) -> Self {
        Self::InvalidCredentials { log }
    }

    /// Generic authentication failure with a server-side root cause
    pub fn unauthorized(log: impl Into<String>) -> Self {
        Self::Unauthorized { log: log.into() }
    }
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    /// Signature valid but the embedded expiry has passed
    #[error("Token expired")]
    Expired,

    /// Malformed token or signature verification failure
    #[error("Invalid token")]
    Invalid,

    /// Signing failed while minting a token
    #[error("Token generation failed")]
    SigningFailed,

    /// Key pair missing or unreadable; fatal at startup
    #[error("Failed to load signing keys: {message}")]
    KeyLoad { message: String },
}

/// Top-level error type crossing the service boundary
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Wraps a persistence failure
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

/// Unified error body for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable generic message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl From<&AuthError> for ErrorResponse {
    fn from(err: &AuthError) -> Self {
        let code = match err {
            AuthError::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            AuthError::Unauthorized { .. } => "UNAUTHORIZED",
        };
        ErrorResponse::new(code, err)
    }
}

impl From<&TokenError> for ErrorResponse {
    fn from(err: &TokenError) -> Self {
        let code = match err {
            TokenError::Expired => "TOKEN_EXPIRED",
            TokenError::Invalid => "INVALID_TOKEN",
            TokenError::SigningFailed => "TOKEN_GENERATION_FAILED",
            TokenError::KeyLoad { .. } => "KEY_LOAD_FAILED",
        };
        ErrorResponse::new(code, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failures_share_one_message() {
        let absent = AuthError::invalid_credentials("account not found");
        let mismatch = AuthError::invalid_credentials("password mismatch");

        assert_eq!(absent.to_string(), mismatch.to_string());
    }

    #[test]
    fn test_unauthorized_log_detail_stays_out_of_message() {
        let err = AuthError::unauthorized("refresh token is revoked or invalid");

        assert_eq!(err.to_string(), "Please authenticate");
        match err {
            AuthError::Unauthorized { log } => {
                assert_eq!(log, "refresh token is revoked or invalid")
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_token_error_response_codes() {
        let response: ErrorResponse = (&TokenError::Expired).into();
        assert_eq!(response.error, "TOKEN_EXPIRED");
        assert_eq!(response.message, "Token expired");

        let response: ErrorResponse = (&TokenError::Invalid).into();
        assert_eq!(response.error, "INVALID_TOKEN");
    }

    #[test]
    fn test_domain_error_wraps_transparently() {
        let err: DomainError = AuthError::invalid_credentials("account not found").into();
        assert_eq!(err.to_string(), "Invalid username or password");

        let err: DomainError = TokenError::SigningFailed.into();
        assert_eq!(err.to_string(), "Token generation failed");
    }
}
