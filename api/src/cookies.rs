//! Session token cookie carriers.
//!
//! Tokens travel in two http-only cookies whose value is a small JSON body
//! `{"token": ..., "expires": ...}`. Each cookie expires at the same instant
//! as the token it carries.

use actix_web::cookie::time::OffsetDateTime;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use serde::{Deserialize, Serialize};

use sf_core::domain::value_objects::SessionTokens;
use sf_core::errors::DomainError;

/// Cookie carrying the access token
pub const ACCESS_TOKEN_COOKIE: &str = "access-token";

/// Cookie carrying the refresh token
pub const REFRESH_TOKEN_COOKIE: &str = "refresh-token";

/// JSON body stored as the cookie value
#[derive(Debug, Serialize, Deserialize)]
pub struct CookiePayload {
    /// The token string
    pub token: String,
    /// Absolute expiry (unix seconds), mirrors the cookie's own expiry
    pub expires: i64,
}

fn session_cookie(
    name: &'static str,
    token: &str,
    expires: i64,
) -> Result<Cookie<'static>, DomainError> {
    let payload = serde_json::to_string(&CookiePayload {
        token: token.to_string(),
        expires,
    })
    .map_err(|e| DomainError::Internal {
        message: format!("Failed to serialize cookie payload: {}", e),
    })?;

    let expiry = OffsetDateTime::from_unix_timestamp(expires).map_err(|e| DomainError::Internal {
        message: format!("Invalid cookie expiry: {}", e),
    })?;

    Ok(Cookie::build(name, payload)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .expires(expiry)
        .finish())
}

/// Builds the access and refresh cookies for a freshly minted pair
pub fn session_cookies(
    tokens: &SessionTokens,
) -> Result<(Cookie<'static>, Cookie<'static>), DomainError> {
    let access = session_cookie(
        ACCESS_TOKEN_COOKIE,
        &tokens.access_token,
        tokens.access_token_expires_at,
    )?;
    let refresh = session_cookie(
        REFRESH_TOKEN_COOKIE,
        &tokens.refresh_token,
        tokens.refresh_token_expires_at,
    )?;
    Ok((access, refresh))
}

/// Builds an immediately-expired cookie that clears the named carrier
pub fn clearing_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build(name, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .finish()
}

/// Reads a token out of the named carrier cookie, if present and well formed
pub fn token_from_cookies(req: &HttpRequest, name: &str) -> Option<String> {
    let cookie = req.cookie(name)?;
    let payload: CookiePayload = serde_json::from_str(cookie.value()).ok()?;
    Some(payload.token)
}
