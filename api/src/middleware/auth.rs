//! Cookie-based authentication middleware for protecting API endpoints.
//!
//! The middleware reads the access token out of its carrier cookie, verifies
//! it against the shared codec, resolves the subject to a live user, and
//! injects an [`AuthenticatedUser`] into request extensions. Handlers take it
//! via the `FromRequest` extractor. Every failure collapses to a single 401
//! so the response never reveals which check rejected the request.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;

use sf_core::domain::entities::user::UserProfile;
use sf_core::repositories::UserRepository;
use sf_core::services::token::TokenCodec;

use crate::cookies::{token_from_cookies, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};

/// Authenticated request context injected by [`CookieAuth`]
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Profile of the verified user, credentials stripped
    pub user: UserProfile,
    /// Refresh token from the companion cookie, for downstream logout
    pub refresh_token: Option<String>,
}

/// Cookie authentication middleware factory
pub struct CookieAuth<U: UserRepository> {
    codec: Arc<TokenCodec>,
    users: Arc<U>,
}

impl<U: UserRepository> CookieAuth<U> {
    /// Creates the middleware bound to a codec and user lookup
    pub fn new(codec: Arc<TokenCodec>, users: Arc<U>) -> Self {
        Self { codec, users }
    }
}

impl<S, B, U> Transform<S, ServiceRequest> for CookieAuth<U>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    U: UserRepository + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CookieAuthMiddleware<S, U>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CookieAuthMiddleware {
            service: Rc::new(service),
            codec: self.codec.clone(),
            users: self.users.clone(),
        }))
    }
}

/// Cookie authentication middleware service
pub struct CookieAuthMiddleware<S, U: UserRepository> {
    service: Rc<S>,
    codec: Arc<TokenCodec>,
    users: Arc<U>,
}

impl<S, B, U> Service<ServiceRequest> for CookieAuthMiddleware<S, U>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    U: UserRepository + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let codec = self.codec.clone();
        let users = self.users.clone();

        Box::pin(async move {
            let unauthorized = |req: ServiceRequest| {
                let response = ErrorUnauthorized("Please authenticate").error_response();
                Ok(req.into_response(response).map_into_right_body())
            };

            let token = match token_from_cookies(req.request(), ACCESS_TOKEN_COOKIE) {
                Some(token) => token,
                None => {
                    return unauthorized(req);
                }
            };

            let claims = match codec.validate(&token) {
                Ok(claims) => claims,
                Err(e) => {
                    log::warn!("Access token rejected: {}", e);
                    return unauthorized(req);
                }
            };

            let user_id = match claims.user_id() {
                Ok(id) => id,
                Err(_) => {
                    log::warn!("Access token subject is not a valid id");
                    return unauthorized(req);
                }
            };

            let user = match users.find_by_id(user_id).await {
                Ok(Some(user)) => user,
                Ok(None) => {
                    log::warn!("Access token subject {} no longer exists", user_id);
                    return unauthorized(req);
                }
                Err(e) => {
                    log::error!("User lookup failed during authentication: {}", e);
                    return unauthorized(req);
                }
            };

            let refresh_token = token_from_cookies(req.request(), REFRESH_TOKEN_COOKIE);

            req.extensions_mut().insert(AuthenticatedUser {
                user: UserProfile::from(&user),
                refresh_token,
            });

            service.call(req).await.map(|res| res.map_into_left_body())
        })
    }
}

/// Extractor for required authentication
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Please authenticate"));

        ready(result)
    }
}
