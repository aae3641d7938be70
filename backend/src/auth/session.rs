//! Session extractor
//!
//! Extracts and validates the Bearer session token on protected routes.
//! Every request re-reads the session row so expiry takes effect
//! immediately; session validity is never cached in-process.

use crate::error::ApiError;
use crate::services::SessionService;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::Utc;

/// Authenticated user resolved from a session token
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: i64,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for SessionUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        // Check Bearer prefix
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))?;

        // Fresh read against user_sessions on every request
        let user_id = SessionService::resolve_user(&app_state.db, token, Utc::now())
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Invalid or expired session".to_string()))?;

        Ok(SessionUser { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_debug() {
        let user = SessionUser { user_id: 7 };
        let debug_str = format!("{:?}", user);
        assert!(debug_str.contains("SessionUser"));
    }
}
