//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! All fields are cheap to clone: the pool is internally reference-counted
//! and the rest sit behind `Arc`s built once at startup.

use crate::config::AppConfig;
use crate::llm::GeminiClient;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Gemini client, absent when the integration is disabled or keyless
    pub gemini: Option<GeminiClient>,
}

impl AppState {
    /// Create a new application state
    ///
    /// The Gemini client (and its HTTP connection pool) is built once here,
    /// not per request.
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        let gemini = GeminiClient::from_config(&config.gemini);

        Self {
            db,
            config: Arc::new(config),
            gemini,
        }
    }

    /// Get a reference to the database pool
    #[inline]
    pub fn db(&self) -> &SqlitePool {
        &self.db
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the Gemini client, if configured
    #[inline]
    pub fn gemini(&self) -> Option<&GeminiClient> {
        self.gemini.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_clone_is_cheap() {
        let config = AppConfig::default();
        let pool = SqlitePool::connect_lazy("sqlite::memory:").unwrap();
        let state = AppState::new(pool, config);

        // Clone should be O(1) - just Arc increments
        let _cloned = state.clone();
    }

    #[tokio::test]
    async fn test_gemini_absent_when_disabled() {
        let config = AppConfig::default();
        let pool = SqlitePool::connect_lazy("sqlite::memory:").unwrap();
        let state = AppState::new(pool, config);

        assert!(state.gemini().is_none());
    }
}
