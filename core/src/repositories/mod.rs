//! Repository interfaces consumed by the authentication services.
//!
//! Concrete database implementations live in the infrastructure crate;
//! in-memory mocks for testing live beside each trait.

pub mod token;
pub mod user;

pub use token::TokenRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use token::MockTokenRepository;
#[cfg(test)]
pub use user::MockUserRepository;
