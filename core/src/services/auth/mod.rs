//! Authentication services: credential verification and the session
//! login/refresh/logout flows.

pub mod password;
pub mod service;

pub use service::AuthService;

#[cfg(test)]
mod tests;
