//! Handler for POST /api/v1/auth/refresh

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};

use sf_core::errors::ErrorResponse;
use sf_core::repositories::{TokenRepository, UserRepository};

use crate::cookies::{session_cookies, token_from_cookies, REFRESH_TOKEN_COOKIE};
use crate::dto::RefreshResponse;
use crate::handlers::handle_domain_error;

use super::AppState;

/// Exchanges the refresh token cookie for a fresh pair.
///
/// The presented token is consumed: its record is deleted before the
/// replacement is written, so replaying it afterwards fails.
///
/// # Response
///
/// ## Success (200 OK)
/// New token pair in the body, both carrier cookies rewritten.
///
/// ## Errors
/// - 401 Unauthorized: Missing cookie, invalid signature, revoked or expired
///   session, or a concurrent rotation won
/// - 500 Internal Server Error: Token generation or persistence failure
pub async fn refresh<U, T>(state: web::Data<AppState<U, T>>, req: HttpRequest) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    log::info!("Refresh request received");

    let refresh_token = match token_from_cookies(&req, REFRESH_TOKEN_COOKIE) {
        Some(token) => token,
        None => {
            return HttpResponse::Unauthorized()
                .json(ErrorResponse::new("UNAUTHORIZED", "Please authenticate"));
        }
    };

    let ip_address = req
        .connection_info()
        .realip_remote_addr()
        .map(|ip| ip.to_string());
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|ua| ua.to_string());

    match state
        .auth_service
        .refresh(&refresh_token, ip_address, user_agent)
        .await
    {
        Ok(tokens) => {
            let (access_cookie, refresh_cookie) = match session_cookies(&tokens) {
                Ok(cookies) => cookies,
                Err(e) => return handle_domain_error(e),
            };

            HttpResponse::Ok()
                .cookie(access_cookie)
                .cookie(refresh_cookie)
                .json(RefreshResponse {
                    message: "Refreshed successfully".to_string(),
                    tokens: (&tokens).into(),
                })
        }
        Err(error) => handle_domain_error(error),
    }
}
