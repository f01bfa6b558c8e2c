//! Periodic sweep of expired refresh tokens.
//!
//! An external scheduler concern in spirit, wired here as a background
//! tokio task so stale rows never outlive their expiry by more than one
//! interval.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::errors::DomainError;
use crate::repositories::TokenRepository;

/// Configuration for the token cleanup task
#[derive(Debug, Clone)]
pub struct TokenCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for TokenCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600, // Run every hour
            enabled: true,
        }
    }
}

/// Service for removing expired refresh token records
pub struct TokenCleanupService<T: TokenRepository + 'static> {
    repository: Arc<T>,
    config: TokenCleanupConfig,
}

impl<T: TokenRepository> TokenCleanupService<T> {
    /// Create a new cleanup service
    pub fn new(repository: Arc<T>, config: TokenCleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single cleanup cycle
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired records deleted
    /// * `Err(DomainError)` - If the sweep fails
    pub async fn run_cleanup(&self) -> Result<usize, DomainError> {
        info!("Cleaning expired refresh tokens");

        let deleted = self.repository.delete_expired().await?;

        info!("Deleted {} expired refresh tokens", deleted);
        Ok(deleted)
    }

    /// Start the cleanup service as a background task
    ///
    /// Spawns a tokio task that runs cleanup at the configured interval.
    pub fn start_background_task(self: Arc<Self>) {
        if !self.config.enabled {
            warn!("Token cleanup service is disabled");
            return;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            info!(
                "Token cleanup service started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);
            // First tick fires immediately; skip it so startup isn't
            // serialized behind a sweep.
            interval_timer.tick().await;

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_cleanup().await {
                    error!("Token cleanup cycle failed: {}", e);
                }
            }
        });
    }
}
