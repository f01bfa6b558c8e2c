//! HTTP middleware: cookie authentication and CORS

pub mod auth;
pub mod cors;

pub use auth::{AuthenticatedUser, CookieAuth};
