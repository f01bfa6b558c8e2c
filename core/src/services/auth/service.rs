//! Main authentication service implementation: login, refresh, logout.
//!
//! Each public operation runs its steps synchronously and fails at the
//! first failing step. The refresh record is persisted only after both
//! tokens have been minted, so no failure path leaves a partial session
//! behind.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken};
use crate::domain::entities::user::UserProfile;
use crate::domain::value_objects::{LoginOutcome, SessionTokens};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::{TokenCodec, TokenConfig};

use super::password::verify_password;

/// Authentication service orchestrating the session-token lifecycle
///
/// Owns the decision to mint, rotate, and revoke; persistence and key
/// material are injected.
pub struct AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// Identity store, read-only here
    user_repository: Arc<U>,
    /// Refresh token persistence
    token_repository: Arc<T>,
    /// Token signing and validation
    codec: Arc<TokenCodec>,
    /// Issuer, audience, and validity windows
    config: TokenConfig,
}

impl<U, T> AuthService<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_repository: Arc<T>,
        codec: Arc<TokenCodec>,
        config: TokenConfig,
    ) -> Self {
        Self {
            user_repository,
            token_repository,
            codec,
            config,
        }
    }

    /// Authenticates a user and opens a new session
    ///
    /// Resolves the account by username or email, verifies the password,
    /// mints an access/refresh pair, and persists the refresh record with
    /// the client metadata.
    ///
    /// Both failure paths (unknown account, wrong password) surface the
    /// same `InvalidCredentials` message; the distinction exists only in
    /// the server-side log detail.
    ///
    /// # Returns
    ///
    /// * `Ok(LoginOutcome)` - Profile plus minted token pair
    /// * `Err(DomainError)` - Credential or persistence failure
    pub async fn login(
        &self,
        username_or_email: &str,
        password: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> DomainResult<LoginOutcome> {
        let user = self
            .user_repository
            .find_by_username_or_email(username_or_email)
            .await?
            .ok_or_else(|| {
                warn!("Login rejected: no account for '{}'", username_or_email);
                AuthError::invalid_credentials("account not found")
            })?;

        if !verify_password(password, &user.password, &user.salt) {
            warn!("Login rejected for user {}: password mismatch", user.id);
            return Err(AuthError::invalid_credentials("password mismatch").into());
        }

        let (tokens, refresh_expires_at) = self.mint_pair(user.id)?;

        let record = RefreshToken::new(
            user.id,
            tokens.refresh_token.clone(),
            ip_address,
            user_agent,
            refresh_expires_at,
        );
        self.token_repository.create(record).await?;

        info!("User {} logged in", user.id);

        Ok(LoginOutcome {
            user: UserProfile::from(&user),
            tokens,
        })
    }

    /// Exchanges a refresh token for a fresh access/refresh pair
    ///
    /// The presented token's signature is checked but its embedded expiry
    /// is ignored; the persisted record is authoritative for session
    /// lifetime and revocation. Rotation deletes the old record before
    /// inserting the new one, so of two concurrent calls with the same
    /// token at most one can succeed, and a crash between the two writes
    /// only ever loses the session.
    ///
    /// # Returns
    ///
    /// * `Ok(SessionTokens)` - The replacement pair
    /// * `Err(DomainError)` - `Unauthorized` on any validation failure
    pub async fn refresh(
        &self,
        refresh_token: &str,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> DomainResult<SessionTokens> {
        let claims = self
            .codec
            .decode_ignoring_expiry(refresh_token)
            .map_err(|_| AuthError::unauthorized("invalid refresh token"))?;

        let stored = self
            .token_repository
            .find_active(refresh_token)
            .await?
            .ok_or_else(|| AuthError::unauthorized("refresh token is revoked or invalid"))?;

        let user_id = claims
            .user_id()
            .map_err(|_| AuthError::unauthorized("refresh token subject is not a valid id"))?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::unauthorized("user no longer exists"))?;

        let (tokens, refresh_expires_at) = self.mint_pair(user.id)?;

        // Rotation: delete-old-then-insert-new. The delete doubles as the
        // compare-and-delete gate against concurrent rotations of the same
        // record.
        let deleted = self.token_repository.delete(stored.id).await?;
        if !deleted {
            warn!(
                "Refresh race lost for user {}: record {} already rotated",
                user.id, stored.id
            );
            return Err(AuthError::unauthorized("refresh token already rotated").into());
        }

        let record = RefreshToken::new(
            user.id,
            tokens.refresh_token.clone(),
            ip_address,
            user_agent,
            refresh_expires_at,
        );
        self.token_repository.create(record).await?;

        info!("Session rotated for user {}", user.id);

        Ok(tokens)
    }

    /// Closes the session owning the presented refresh token
    ///
    /// Idempotent: a token that is unknown or already consumed is a no-op,
    /// not an error.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        if let Some(stored) = self.token_repository.find_active(refresh_token).await? {
            self.token_repository.delete(stored.id).await?;
            info!("User {} logged out", stored.user_id);
        }
        Ok(())
    }

    /// Mints an access/refresh pair for a subject
    ///
    /// Each token carries its own fresh random parameter; the refresh
    /// token's expiry is returned separately so the persisted record can
    /// mirror the embedded `exp` exactly.
    fn mint_pair(&self, user_id: Uuid) -> DomainResult<(SessionTokens, DateTime<Utc>)> {
        let access_claims = Claims::new(
            &self.config.issuer,
            &self.config.audience,
            user_id,
            random_param(),
            self.config.access_token_validity_secs,
        );
        let refresh_claims = Claims::new(
            &self.config.issuer,
            &self.config.audience,
            user_id,
            random_param(),
            self.config.refresh_token_validity_secs,
        );

        let access_token = self.codec.encode(&access_claims)?;
        let refresh_token = self.codec.encode(&refresh_claims)?;

        let refresh_expires_at = Utc
            .timestamp_opt(refresh_claims.exp, 0)
            .single()
            .ok_or_else(|| DomainError::Internal {
                message: "Invalid expiry timestamp".to_string(),
            })?;

        Ok((
            SessionTokens {
                access_token,
                access_token_expires_at: access_claims.exp,
                refresh_token,
                refresh_token_expires_at: refresh_claims.exp,
            },
            refresh_expires_at,
        ))
    }
}

/// Generates a per-token random parameter (64 bytes, hex-encoded)
fn random_param() -> String {
    let mut bytes = [0u8; 64];
    rand::thread_rng().fill(&mut bytes[..]);
    hex::encode(bytes)
}
