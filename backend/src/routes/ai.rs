//! AI collaborator route
//!
//! Forwards a caller-assembled prompt to the configured Gemini model and
//! returns the reply text verbatim. No prompt construction and no
//! response parsing happen server-side.

use crate::auth::SessionUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use fittrack_shared::types::{GenerateTextRequest, GenerateTextResponse};

/// Create AI routes
pub fn ai_routes() -> Router<AppState> {
    Router::new().route("/generate", post(generate_text))
}

/// Forward a prompt to the text-generation collaborator
///
/// POST /api/v1/ai/generate
async fn generate_text(
    State(state): State<AppState>,
    _session: SessionUser,
    Json(req): Json<GenerateTextRequest>,
) -> ApiResult<Json<GenerateTextResponse>> {
    if req.prompt.trim().is_empty() {
        return Err(ApiError::Validation("Prompt must not be empty".to_string()));
    }

    let client = state
        .gemini()
        .ok_or_else(|| ApiError::Unavailable("Gemini integration is not configured".to_string()))?;

    let text = client.generate(&req.prompt).await?;

    Ok(Json(GenerateTextResponse { text }))
}
