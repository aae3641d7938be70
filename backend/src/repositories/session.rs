//! Session repository for database operations
//!
//! Sessions are rows keyed by an opaque token. Validity is decided against
//! a freshly read `expires_at` on every lookup; nothing here is cached.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Session record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionRecord {
    pub id: i64,
    pub user_id: i64,
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Session repository for database operations
pub struct SessionRepository;

impl SessionRepository {
    /// Insert a new session row
    ///
    /// Token uniqueness and the user foreign key are schema-enforced.
    pub async fn create(
        pool: &SqlitePool,
        user_id: i64,
        session_token: &str,
        expires_at: DateTime<Utc>,
    ) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO user_sessions (user_id, session_token, expires_at, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(session_token)
        .bind(expires_at)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
    }

    /// Look up a session by its token
    pub async fn find_by_token(
        pool: &SqlitePool,
        session_token: &str,
    ) -> sqlx::Result<Option<SessionRecord>> {
        sqlx::query_as::<_, SessionRecord>(
            r#"
            SELECT id, user_id, session_token, expires_at, created_at
            FROM user_sessions
            WHERE session_token = ?
            "#,
        )
        .bind(session_token)
        .fetch_optional(pool)
        .await
    }
}
