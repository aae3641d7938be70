//! User and session routes
//!
//! Account rows and session rows are created here; profile routes are
//! scoped to the authenticated session user.

use crate::auth::SessionUser;
use crate::error::ApiResult;
use crate::services::{SessionService, UserService};
use crate::state::AppState;
use axum::{
    extract::State,
    http::header::AUTHORIZATION,
    http::HeaderMap,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use fittrack_shared::models::{User, UserProfile};
use fittrack_shared::types::{Created, CreateSessionRequest, CreateUserRequest};
use serde::Serialize;

/// Create user and session routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/sessions", post(create_session))
        .route("/sessions/current", get(current_session))
        .route("/profile", get(get_profile))
        .route("/profile", put(update_profile))
}

/// Register a new account row
///
/// POST /api/v1/users
async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<Json<Created>> {
    let id = UserService::create_user(&state.db, &req).await?;
    Ok(Json(Created { id }))
}

/// Persist a session token for a user
///
/// POST /api/v1/sessions
async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> ApiResult<Json<Created>> {
    let id = SessionService::create_session(
        &state.db,
        req.user_id,
        &req.session_token,
        req.expires_at,
    )
    .await?;
    Ok(Json(Created { id }))
}

/// Session validity response
#[derive(Serialize)]
struct SessionStatus {
    valid: bool,
}

/// Report whether the presented session token is currently valid
///
/// GET /api/v1/sessions/current
///
/// Unlike protected routes this does not reject: an absent or expired
/// token yields `valid: false`.
async fn current_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<SessionStatus>> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let valid = match token {
        Some(token) => SessionService::is_session_valid(&state.db, token, Utc::now()).await?,
        None => false,
    };

    Ok(Json(SessionStatus { valid }))
}

/// Get the authenticated user's account and profile
///
/// GET /api/v1/profile
async fn get_profile(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<User>> {
    let user = UserService::get_user(&state.db, session.user_id).await?;
    Ok(Json(user))
}

/// Partially update the authenticated user's profile
///
/// PUT /api/v1/profile
async fn update_profile(
    State(state): State<AppState>,
    session: SessionUser,
    Json(updates): Json<UserProfile>,
) -> ApiResult<Json<User>> {
    UserService::update_profile(&state.db, session.user_id, &updates).await?;
    let user = UserService::get_user(&state.db, session.user_id).await?;
    Ok(Json(user))
}
