//! Maps domain errors onto HTTP responses.
//!
//! Client-facing bodies stay generic; the root cause (including the `log`
//! fields carried inside the error variants) goes to the server log only.

use actix_web::HttpResponse;

use sf_core::errors::{AuthError, DomainError, ErrorResponse, TokenError};

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials { log } => {
                log::warn!("Login failed: {}", log);
                HttpResponse::BadRequest().json(ErrorResponse::from(&auth_error))
            }
            AuthError::Unauthorized { ref log } => {
                log::warn!("Authentication failed: {}", log);
                HttpResponse::Unauthorized().json(ErrorResponse::from(&auth_error))
            }
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::Expired | TokenError::Invalid => {
                log::warn!("Token rejected: {}", token_error);
                // Same body as any other authentication failure
                HttpResponse::Unauthorized()
                    .json(ErrorResponse::new("UNAUTHORIZED", "Please authenticate"))
            }
            TokenError::SigningFailed | TokenError::KeyLoad { .. } => {
                log::error!("Token subsystem failure: {}", token_error);
                internal_error()
            }
        },
        DomainError::Database { message } => {
            log::error!("Database error: {}", message);
            internal_error()
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            internal_error()
        }
    }
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        "INTERNAL_ERROR",
        "An internal error occurred",
    ))
}
