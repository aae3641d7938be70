//! Progress-tracking repository
//!
//! `progress_tracking` is append-only: inserts and ordered reads are the
//! entire surface. There is deliberately no update or delete here.

use chrono::NaiveDate;
use sqlx::SqlitePool;

/// Progress record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProgressRecord {
    pub id: i64,
    pub user_id: i64,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub date: NaiveDate,
}

/// Progress repository for database operations
pub struct ProgressRepository;

impl ProgressRepository {
    /// Append a measurement event
    pub async fn insert(
        pool: &SqlitePool,
        user_id: i64,
        height_cm: f64,
        weight_kg: f64,
        date: NaiveDate,
    ) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO progress_tracking (user_id, height_cm, weight_kg, date)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(height_cm)
        .bind(weight_kg)
        .bind(date)
        .fetch_one(pool)
        .await
    }

    /// All measurement events for a user, oldest first
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: i64,
    ) -> sqlx::Result<Vec<ProgressRecord>> {
        sqlx::query_as::<_, ProgressRecord>(
            r#"
            SELECT id, user_id, height_cm, weight_kg, date
            FROM progress_tracking
            WHERE user_id = ?
            ORDER BY date ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
