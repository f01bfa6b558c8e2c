//! MySQL implementation of the UserRepository trait.
//!
//! The authentication layer only reads user records; account creation and
//! profile updates are owned by the user module.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sf_core::domain::entities::user::{User, UserRole};
use sf_core::errors::DomainError;
use sf_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
        let role: String = row
            .try_get("role")
            .map_err(|e| DomainError::database(format!("Failed to get role: {}", e)))?;

        let role = match role.as_str() {
            "admin" => UserRole::Admin,
            "user" => UserRole::User,
            other => {
                return Err(DomainError::database(format!("Unknown user role: {}", other)));
            }
        };

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid user UUID: {}", e)))?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::database(format!("Failed to get username: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::database(format!("Failed to get email: {}", e)))?,
            password: row
                .try_get("password")
                .map_err(|e| DomainError::database(format!("Failed to get password: {}", e)))?,
            salt: row
                .try_get("salt")
                .map_err(|e| DomainError::database(format!("Failed to get salt: {}", e)))?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| DomainError::database(format!("Failed to get first_name: {}", e)))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| DomainError::database(format!("Failed to get last_name: {}", e)))?,
            role,
            is_email_verified: row.try_get("is_email_verified").map_err(|e| {
                DomainError::database(format!("Failed to get is_email_verified: {}", e))
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_username_or_email(
        &self,
        username_or_email: &str,
    ) -> Result<Option<User>, DomainError> {
        // Usernames match exactly; emails match case-insensitively and are
        // stored lowercase.
        let query = r#"
            SELECT id, username, email, password, salt, first_name, last_name,
                   role, is_email_verified, created_at, updated_at
            FROM users
            WHERE username = ? OR email = LOWER(?)
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(username_or_email)
            .bind(username_or_email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to find user: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, username, email, password, salt, first_name, last_name,
                   role, is_email_verified, created_at, updated_at
            FROM users
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to find user by id: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}
