//! Business services: token lifecycle and session authentication.

pub mod auth;
pub mod token;

pub use auth::AuthService;
pub use token::{KeyStore, TokenCleanupService, TokenCodec, TokenConfig};
