//! User entity representing a registered account in the Storefront system.
//!
//! The identity store itself is owned by the user module; this layer only
//! reads credential records during authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular customer account
    User,
    /// Administrative account
    Admin,
}

/// User entity representing a registered account
///
/// `password` holds `bcrypt(raw_password + "." + salt)`; the salt is
/// generated once at account creation and never rotated per login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique login name
    pub username: String,

    /// Unique email address, stored lowercase
    pub email: String,

    /// Salted password hash
    pub password: String,

    /// Per-account salt mixed into the password before hashing
    pub salt: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Role of the account
    pub role: UserRole,

    /// Whether the email address has been verified
    pub is_email_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a [`User`] with credential material stripped
///
/// Used everywhere a user leaves the authentication layer: session results,
/// request context, API responses. Explicit typed projection instead of a
/// runtime field-selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub is_email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
            is_email_verified: user.is_email_verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
