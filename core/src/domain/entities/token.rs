//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token validity window (48 hours, in seconds)
pub const ACCESS_TOKEN_VALIDITY_SECS: i64 = 172_800;

/// Default refresh token validity window (7 days, in seconds)
pub const REFRESH_TOKEN_VALIDITY_SECS: i64 = 604_800;

/// Default JWT issuer
pub const TOKEN_ISSUER: &str = "storefront";

/// Default JWT audience
pub const TOKEN_AUDIENCE: &str = "storefront-api";

/// Claims structure for the JWT payload
///
/// The `prm` field carries a per-token random parameter so that two tokens
/// minted for the same subject in the same second still differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp (unix seconds)
    pub iat: i64,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,

    /// Per-token random parameter
    pub prm: String,
}

impl Claims {
    /// Creates claims for a token valid for `validity_secs` from now
    ///
    /// # Arguments
    ///
    /// * `issuer` - Token issuer identifier
    /// * `audience` - Intended recipient identifier
    /// * `subject` - The user's UUID
    /// * `param` - Fresh random per-token parameter
    /// * `validity_secs` - Validity window in seconds
    pub fn new(
        issuer: &str,
        audience: &str,
        subject: Uuid,
        param: String,
        validity_secs: i64,
    ) -> Self {
        let iat = Utc::now().timestamp();
        Self {
            iss: issuer.to_string(),
            aud: audience.to_string(),
            sub: subject.to_string(),
            iat,
            exp: iat + validity_secs,
            prm: param,
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    ///
    /// # Returns
    ///
    /// `Ok(Uuid)` if the subject can be parsed as a UUID, `Err` otherwise
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token record persisted in the database
///
/// Revocation is delete-based: an existing row is an active session, and
/// rotation or logout removes it. There is no revoked flag to flip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the record
    pub id: Uuid,

    /// User ID this token belongs to
    pub user_id: Uuid,

    /// Raw refresh token value as handed to the client
    pub token: String,

    /// Client IP address captured at issuance
    pub ip_address: Option<String>,

    /// Client user agent captured at issuance
    pub user_agent: Option<String>,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires (mirrors the embedded `exp`)
    pub expires_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new refresh token record
    pub fn new(
        user_id: Uuid,
        token: String,
        ip_address: Option<String>,
        user_agent: Option<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            token,
            ip_address,
            user_agent,
            created_at: Utc::now(),
            expires_at,
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_claims(validity_secs: i64) -> (Uuid, Claims) {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(
            TOKEN_ISSUER,
            TOKEN_AUDIENCE,
            user_id,
            "a1b2c3".to_string(),
            validity_secs,
        );
        (user_id, claims)
    }

    #[test]
    fn test_claims_construction() {
        let (user_id, claims) = sample_claims(ACCESS_TOKEN_VALIDITY_SECS);

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.iss, TOKEN_ISSUER);
        assert_eq!(claims.aud, TOKEN_AUDIENCE);
        assert_eq!(claims.exp, claims.iat + ACCESS_TOKEN_VALIDITY_SECS);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_user_id_parsing() {
        let (user_id, claims) = sample_claims(60);

        let parsed_id = claims.user_id().unwrap();
        assert_eq!(parsed_id, user_id);
    }

    #[test]
    fn test_claims_expiration() {
        let (_, mut claims) = sample_claims(60);

        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
    }

    #[test]
    fn test_claims_serialization() {
        let (_, claims) = sample_claims(60);

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_refresh_token_creation() {
        let user_id = Uuid::new_v4();
        let expires_at = Utc::now() + Duration::seconds(REFRESH_TOKEN_VALIDITY_SECS);
        let record = RefreshToken::new(
            user_id,
            "raw_token_value".to_string(),
            Some("203.0.113.7".to_string()),
            Some("Mozilla/5.0".to_string()),
            expires_at,
        );

        assert_eq!(record.user_id, user_id);
        assert_eq!(record.token, "raw_token_value");
        assert_eq!(record.expires_at, expires_at);
        assert!(!record.is_expired());
    }

    #[test]
    fn test_refresh_token_expiration() {
        let user_id = Uuid::new_v4();
        let mut record = RefreshToken::new(
            user_id,
            "raw".to_string(),
            None,
            None,
            Utc::now() + Duration::days(7),
        );

        record.expires_at = Utc::now() - Duration::days(1);

        assert!(record.is_expired());
        assert_eq!(record.time_until_expiration(), Duration::zero());
    }

    #[test]
    fn test_refresh_token_time_until_expiration() {
        let record = RefreshToken::new(
            Uuid::new_v4(),
            "raw".to_string(),
            None,
            None,
            Utc::now() + Duration::seconds(REFRESH_TOKEN_VALIDITY_SECS),
        );

        let remaining = record.time_until_expiration();
        assert!(remaining <= Duration::seconds(REFRESH_TOKEN_VALIDITY_SECS));
        assert!(remaining > Duration::seconds(REFRESH_TOKEN_VALIDITY_SECS - 60));
    }
}
