//! Session service
//!
//! Sessions are opaque tokens with a hard expiry. Validity is always
//! decided against a freshly read row; per spec there is no in-process
//! cache of session state, so a shortened or removed session takes effect
//! on the very next request.

use crate::error::ApiError;
use crate::repositories::SessionRepository;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::info;

/// Session service for token-backed authentication state
pub struct SessionService;

impl SessionService {
    /// Persist a session row for a user
    ///
    /// The token is caller-supplied and opaque here. Duplicate tokens and
    /// unknown users both surface as `ConstraintViolation`.
    pub async fn create_session(
        pool: &SqlitePool,
        user_id: i64,
        session_token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<i64, ApiError> {
        if session_token.trim().is_empty() {
            return Err(ApiError::Validation(
                "Session token must not be empty".to_string(),
            ));
        }

        let id = SessionRepository::create(pool, user_id, session_token, expires_at).await?;

        info!(user_id, session_id = id, "Session created");

        Ok(id)
    }

    /// True iff a session with this token exists and has not expired
    pub async fn is_session_valid(
        pool: &SqlitePool,
        session_token: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, ApiError> {
        let session = SessionRepository::find_by_token(pool, session_token).await?;

        Ok(match session {
            Some(session) => now <= session.expires_at,
            None => false,
        })
    }

    /// Resolve a token to its user, or None when missing/expired
    pub async fn resolve_user(
        pool: &SqlitePool,
        session_token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<i64>, ApiError> {
        let session = SessionRepository::find_by_token(pool, session_token).await?;

        Ok(session
            .filter(|s| now <= s.expires_at)
            .map(|s| s.user_id))
    }
}
