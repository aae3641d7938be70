//! Progress routes: append-only body-metric history

use crate::auth::SessionUser;
use crate::error::ApiResult;
use crate::services::ProgressService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use fittrack_shared::models::BodyMetric;
use fittrack_shared::types::{Created, RecordProgressRequest};

/// Create progress routes
pub fn progress_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(record_progress))
        .route("/", get(body_metrics))
}

/// Append a measurement event
///
/// POST /api/v1/progress
async fn record_progress(
    State(state): State<AppState>,
    session: SessionUser,
    Json(req): Json<RecordProgressRequest>,
) -> ApiResult<Json<Created>> {
    let id = ProgressService::record_progress(&state.db, session.user_id, &req).await?;
    Ok(Json(Created { id }))
}

/// Measurement history, oldest first
///
/// GET /api/v1/progress
async fn body_metrics(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<Vec<BodyMetric>>> {
    let metrics = ProgressService::body_metrics(&state.db, session.user_id).await?;
    Ok(Json(metrics))
}
