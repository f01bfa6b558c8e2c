//! Tests for the expired-token sweep

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::repositories::{MockTokenRepository, TokenRepository};
use crate::services::token::{TokenCleanupConfig, TokenCleanupService};

fn record_expiring_at(offset: Duration) -> RefreshToken {
    RefreshToken::new(
        Uuid::new_v4(),
        format!("token-{}", Uuid::new_v4()),
        None,
        None,
        Utc::now() + offset,
    )
}

#[tokio::test]
async fn test_cleanup_deletes_only_expired_records() {
    let repository = Arc::new(MockTokenRepository::new());
    repository
        .create(record_expiring_at(Duration::days(-2)))
        .await
        .unwrap();
    repository
        .create(record_expiring_at(Duration::seconds(-120)))
        .await
        .unwrap();
    repository
        .create(record_expiring_at(Duration::days(7)))
        .await
        .unwrap();

    let service = TokenCleanupService::new(repository.clone(), TokenCleanupConfig::default());
    let deleted = service.run_cleanup().await.unwrap();

    assert_eq!(deleted, 2);
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_cleanup_second_run_finds_nothing() {
    let repository = Arc::new(MockTokenRepository::new());
    repository
        .create(record_expiring_at(Duration::hours(-1)))
        .await
        .unwrap();

    let service = TokenCleanupService::new(repository.clone(), TokenCleanupConfig::default());

    assert_eq!(service.run_cleanup().await.unwrap(), 1);
    assert_eq!(service.run_cleanup().await.unwrap(), 0);
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn test_cleanup_on_empty_store() {
    let repository = Arc::new(MockTokenRepository::new());
    let service = TokenCleanupService::new(repository, TokenCleanupConfig::default());

    assert_eq!(service.run_cleanup().await.unwrap(), 0);
}
