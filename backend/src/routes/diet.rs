//! Diet routes: plans, meal logs, nutrition summary

use crate::auth::SessionUser;
use crate::error::ApiResult;
use crate::services::DietService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use fittrack_shared::types::{
    Created, DailyNutrition, DietPlanInput, DietPlanSummary, LogMealRequest, MealPlanDetail,
};
use serde::Deserialize;

/// Create diet routes
pub fn diet_routes() -> Router<AppState> {
    Router::new()
        .route("/plans", post(create_plan).get(list_plans))
        .route("/plans/:id/meals", get(plan_meals))
        .route("/plans/:id", delete(delete_plan))
        .route("/meals", post(log_meal))
        .route("/nutrition", get(nutrition_summary))
}

/// Save a (typically AI-generated) diet plan
///
/// POST /api/v1/diet/plans
async fn create_plan(
    State(state): State<AppState>,
    session: SessionUser,
    Json(plan): Json<DietPlanInput>,
) -> ApiResult<Json<Created>> {
    let id = DietService::generate_plan(&state.db, session.user_id, &plan).await?;
    Ok(Json(Created { id }))
}

/// List the user's diet plans, newest first
///
/// GET /api/v1/diet/plans
async fn list_plans(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<Vec<DietPlanSummary>>> {
    let plans = DietService::list_plans(&state.db, session.user_id).await?;
    Ok(Json(plans))
}

/// Planned meals of one diet plan
///
/// GET /api/v1/diet/plans/:id/meals
async fn plan_meals(
    State(state): State<AppState>,
    session: SessionUser,
    Path(plan_id): Path<i64>,
) -> ApiResult<Json<Vec<MealPlanDetail>>> {
    let meals = DietService::plan_meals(&state.db, session.user_id, plan_id).await?;
    Ok(Json(meals))
}

/// Delete a diet plan, detaching its meal logs
///
/// DELETE /api/v1/diet/plans/:id
async fn delete_plan(
    State(state): State<AppState>,
    session: SessionUser,
    Path(plan_id): Path<i64>,
) -> ApiResult<Json<serde_json::Value>> {
    DietService::delete_plan(&state.db, session.user_id, plan_id).await?;
    Ok(Json(serde_json::json!({ "deleted": plan_id })))
}

/// Log a consumed meal (ad-hoc or linked to a planned one)
///
/// POST /api/v1/diet/meals
async fn log_meal(
    State(state): State<AppState>,
    session: SessionUser,
    Json(req): Json<LogMealRequest>,
) -> ApiResult<Json<Created>> {
    let id = DietService::log_meal(&state.db, session.user_id, &req).await?;
    Ok(Json(Created { id }))
}

/// Nutrition window query
#[derive(Debug, Deserialize)]
struct NutritionQuery {
    #[serde(default = "default_days")]
    days: i64,
}

fn default_days() -> i64 {
    30
}

/// Daily nutrition totals vs. the active calorie target
///
/// GET /api/v1/diet/nutrition?days=30
async fn nutrition_summary(
    State(state): State<AppState>,
    session: SessionUser,
    Query(query): Query<NutritionQuery>,
) -> ApiResult<Json<Vec<DailyNutrition>>> {
    let summary = DietService::nutrition_summary(&state.db, session.user_id, query.days).await?;
    Ok(Json(summary))
}
