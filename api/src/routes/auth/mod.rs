//! Authentication route handlers
//!
//! Endpoints:
//! - Login (credential verification, session creation)
//! - Token refresh (rotation)
//! - Logout (session revocation)

use std::sync::Arc;

use sf_core::repositories::{TokenRepository, UserRepository};
use sf_core::services::auth::AuthService;

pub mod login;
pub mod logout;
pub mod refresh;

/// Shared application state handed to the auth handlers
pub struct AppState<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    pub auth_service: Arc<AuthService<U, T>>,
}
