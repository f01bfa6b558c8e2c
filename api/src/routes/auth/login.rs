//! Handler for POST /api/v1/auth/login

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use sf_core::errors::ErrorResponse;
use sf_core::repositories::{TokenRepository, UserRepository};

use crate::cookies::session_cookies;
use crate::dto::{LoginRequest, LoginResponse};
use crate::handlers::handle_domain_error;

use super::AppState;

/// Authenticates a user and opens a session.
///
/// # Request Body
///
/// ```json
/// {
///     "username": "jane",
///     "password": "secret"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// Profile plus both tokens with absolute expiries; the same tokens are set
/// as http-only cookies.
///
/// ## Errors
/// - 400 Bad Request: Invalid body, or wrong credentials (one generic message
///   whether the account is unknown or the password mismatched)
/// - 500 Internal Server Error: Token generation or persistence failure
pub async fn login<U, T>(
    state: web::Data<AppState<U, T>>,
    req: HttpRequest,
    body: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
{
    log::info!("Login request received");

    if body.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "VALIDATION_ERROR",
            "Invalid request body",
        ));
    }

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
        .login(&body.username, &body.password, ip_address, user_agent)
        .await
    {
        Ok(outcome) => {
            let (access_cookie, refresh_cookie) = match session_cookies(&outcome.tokens) {
                Ok(cookies) => cookies,
                Err(e) => return handle_domain_error(e),
            };

            HttpResponse::Ok()
                .cookie(access_cookie)
                .cookie(refresh_cookie)
                .json(LoginResponse {
                    message: "Login successfully".to_string(),
                    user: outcome.user,
                    tokens: (&outcome.tokens).into(),
                })
        }
        Err(error) => handle_domain_error(error),
    }
}

#[cfg(test)]
mod tests {
    use crate::dto::LoginRequest;

    #[test]
    fn test_login_request_deserialization() {
        let body = r#"{"username": "jane", "password": "secret"}"#;
        let request: LoginRequest = serde_json::from_str(body).unwrap();

        assert_eq!(request.username, "jane");
        assert_eq!(request.password, "secret");
    }
}
