//! Session value objects returned by the authentication flows.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::UserProfile;

/// Freshly minted access/refresh token pair
///
/// Expiry fields carry the absolute `exp` of each token (unix seconds) so
/// the HTTP layer can expire the credential carriers at the same instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionTokens {
    /// Signed access token
    pub access_token: String,

    /// Absolute expiry of the access token (unix seconds)
    pub access_token_expires_at: i64,

    /// Signed refresh token
    pub refresh_token: String,

    /// Absolute expiry of the refresh token (unix seconds)
    pub refresh_token_expires_at: i64,
}

/// Result of a successful login: the authenticated profile plus tokens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Authenticated user with credential material stripped
    pub user: UserProfile,

    /// Minted token pair
    pub tokens: SessionTokens,
}
