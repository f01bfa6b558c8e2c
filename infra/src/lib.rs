//! # Infrastructure Layer
//!
//! Concrete persistence implementations for the Storefront backend. The
//! domain traits live in `sf_core`; this crate binds them to MySQL via SQLx.

pub mod database;

pub use database::{create_pool, DatabaseConfig, MySqlTokenRepository, MySqlUserRepository};
