//! Token services: RS256 key management, signing/validation, configuration,
//! and periodic cleanup of expired refresh tokens.

pub mod cleanup;
pub mod codec;
pub mod config;
pub mod key_store;

pub use cleanup::{TokenCleanupConfig, TokenCleanupService};
pub use codec::TokenCodec;
pub use config::TokenConfig;
pub use key_store::KeyStore;

#[cfg(test)]
pub(crate) mod tests;
