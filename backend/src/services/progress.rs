//! Progress service: append-only body-metric history
//!
//! Once written, a measurement is never updated or deleted; corrections
//! are new rows.

use crate::error::ApiError;
use crate::repositories::ProgressRepository;
use chrono::Utc;
use fittrack_shared::models::BodyMetric;
use fittrack_shared::types::RecordProgressRequest;
use fittrack_shared::validation;
use sqlx::SqlitePool;
use tracing::info;

/// Progress service for body-metric tracking
pub struct ProgressService;

impl ProgressService {
    /// Append a measurement event; the date defaults to today
    pub async fn record_progress(
        pool: &SqlitePool,
        user_id: i64,
        req: &RecordProgressRequest,
    ) -> Result<i64, ApiError> {
        validation::validate_height_cm(req.height_cm).map_err(ApiError::Validation)?;
        validation::validate_weight_kg(req.weight_kg).map_err(ApiError::Validation)?;

        let date = req.date.unwrap_or_else(|| Utc::now().date_naive());

        let id = ProgressRepository::insert(pool, user_id, req.height_cm, req.weight_kg, date)
            .await?;

        info!(user_id, entry_id = id, %date, "Progress recorded");

        Ok(id)
    }

    /// Measurement history, oldest first
    pub async fn body_metrics(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<BodyMetric>, ApiError> {
        let records = ProgressRepository::list_for_user(pool, user_id).await?;

        Ok(records
            .into_iter()
            .map(|r| BodyMetric {
                height_cm: r.height_cm,
                weight_kg: r.weight_kg,
                date: r.date,
            })
            .collect())
    }
}
