//! Handler for POST /api/v1/auth/logout

use actix_web::{web, HttpResponse};

use sf_core::repositories::{TokenRepository, UserRepository};

use crate::cookies::{clearing_cookie, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
use crate::dto::MessageResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthenticatedUser;

use super::AppState;

/// Closes the caller's session and clears both carrier cookies.
///
/// Requires authentication (the route sits behind [`crate::middleware::CookieAuth`]).
/// Revocation is idempotent: a session that is already gone still yields 200.
pub async fn logout<U, T>(
    state: web::Data<AppState<U, T>>,
    auth: AuthenticatedUser,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    log::info!("Logout request received for user {}", auth.user.id);

    if let Some(refresh_token) = auth.refresh_token.as_deref() {
        if let Err(error) = state.auth_service.logout(refresh_token).await {
            return handle_domain_error(error);
        }
    }

    HttpResponse::Ok()
        .cookie(clearing_cookie(ACCESS_TOKEN_COOKIE))
        .cookie(clearing_cookie(REFRESH_TOKEN_COOKIE))
        .json(MessageResponse::new("Logged out successfully"))
}
