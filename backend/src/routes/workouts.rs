//! Workout routes: plans, logs, aggregated history

use crate::auth::SessionUser;
use crate::error::ApiResult;
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use fittrack_shared::types::{
    Created, LogWorkoutRequest, WorkoutDayDetail, WorkoutHistoryEntry, WorkoutLogEntry,
    WorkoutPlanInput, WorkoutPlanSummary,
};
use serde::Deserialize;

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/plans", post(create_plan).get(list_plans))
        .route("/plans/:id/days", get(plan_days))
        .route("/plans/:id", delete(delete_plan))
        .route("/logs", post(log_workout).get(list_logs))
        .route("/history", get(history))
}

/// Save a (typically AI-generated) workout plan
///
/// POST /api/v1/workouts/plans
async fn create_plan(
    State(state): State<AppState>,
    session: SessionUser,
    Json(plan): Json<WorkoutPlanInput>,
) -> ApiResult<Json<Created>> {
    let id = WorkoutService::generate_plan(&state.db, session.user_id, &plan).await?;
    Ok(Json(Created { id }))
}

/// List the user's workout plans, newest first
///
/// GET /api/v1/workouts/plans
async fn list_plans(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<Vec<WorkoutPlanSummary>>> {
    let plans = WorkoutService::list_plans(&state.db, session.user_id).await?;
    Ok(Json(plans))
}

/// Days and prescribed exercises of one plan
///
/// GET /api/v1/workouts/plans/:id/days
async fn plan_days(
    State(state): State<AppState>,
    session: SessionUser,
    Path(plan_id): Path<i64>,
) -> ApiResult<Json<Vec<WorkoutDayDetail>>> {
    let days = WorkoutService::plan_days(&state.db, session.user_id, plan_id).await?;
    Ok(Json(days))
}

/// Delete a plan and everything hanging off it
///
/// DELETE /api/v1/workouts/plans/:id
async fn delete_plan(
    State(state): State<AppState>,
    session: SessionUser,
    Path(plan_id): Path<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    WorkoutService::delete_plan(&state.db, session.user_id, plan_id).await?;
    Ok(Json(serde_json::json!({ "deleted": plan_id })))
}

/// Log a completed workout
///
/// POST /api/v1/workouts/logs
async fn log_workout(
    State(state): State<AppState>,
    session: SessionUser,
    Json(req): Json<LogWorkoutRequest>,
) -> ApiResult<Json<Created>> {
    let id = WorkoutService::log_workout(&state.db, session.user_id, &req).await?;
    Ok(Json(Created { id }))
}

/// List logged workouts, joined with their day
///
/// GET /api/v1/workouts/logs
async fn list_logs(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<Vec<WorkoutLogEntry>>> {
    let logs = WorkoutService::list_logs(&state.db, session.user_id).await?;
    Ok(Json(logs))
}

/// History window query
#[derive(Debug, Deserialize)]
struct HistoryQuery {
    #[serde(default = "default_days")]
    days: i64,
}

fn default_days() -> i64 {
    30
}

/// Aggregated training history
///
/// GET /api/v1/workouts/history?days=30
async fn history(
    State(state): State<AppState>,
    session: SessionUser,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<Json<Vec<WorkoutHistoryEntry>>> {
    let entries = WorkoutService::history(&state.db, session.user_id, query.days).await?;
    Ok(Json(entries))
}
