//! Authentication request/response bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

use sf_core::domain::entities::user::UserProfile;
use sf_core::domain::value_objects::SessionTokens;

/// Body of POST /api/v1/auth/login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username or email address
    #[validate(length(min = 1, max = 255))]
    pub username: String,
    #[validate(length(min = 1, max = 255))]
    pub password: String,
}

/// Token pair with absolute expiries (unix seconds)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTokensDto {
    pub access_token: String,
    pub access_token_expires_in: i64,
    pub refresh_token: String,
    pub refresh_token_expires_in: i64,
}

impl From<&SessionTokens> for SessionTokensDto {
    fn from(tokens: &SessionTokens) -> Self {
        Self {
            access_token: tokens.access_token.clone(),
            access_token_expires_in: tokens.access_token_expires_at,
            refresh_token: tokens.refresh_token.clone(),
            refresh_token_expires_in: tokens.refresh_token_expires_at,
        }
    }
}

/// Successful login body: profile plus the minted pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserProfile,
    #[serde(flatten)]
    pub tokens: SessionTokensDto,
}

/// Successful refresh body: the replacement pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub message: String,
    #[serde(flatten)]
    pub tokens: SessionTokensDto,
}

/// Generic success body for refresh and logout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
