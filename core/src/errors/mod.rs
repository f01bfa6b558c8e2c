pub mod domain_error;

pub use domain_error::{AuthError, DomainError, ErrorResponse, TokenError};

/// Convenience alias used throughout the services
pub type DomainResult<T> = Result<T, DomainError>;
