//! Common test utilities for integration tests
//!
//! Tests run against an in-memory SQLite database with the production
//! migrations applied. The pool is capped at one connection so every
//! query sees the same in-memory database.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use fittrack_backend::services::{SessionService, UserService};
use fittrack_backend::{config::AppConfig, routes, state::AppState};
use fittrack_shared::models::UserProfile;
use fittrack_shared::types::CreateUserRequest;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    /// Create a new test application with a fresh in-memory database
    pub async fn new() -> Self {
        let pool = test_pool().await;
        let state = AppState::new(pool.clone(), test_config());
        let app = routes::create_router(state);

        Self { app, pool }
    }

    /// Make a GET request, optionally with a Bearer session token
    pub async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, String) {
        let mut builder = Request::builder().method("GET").uri(path);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = builder.body(Body::empty()).unwrap();

        self.send(request).await
    }

    /// Make a POST request with a JSON body, optionally authenticated
    pub async fn post(&self, path: &str, body: &str, token: Option<&str>) -> (StatusCode, String) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();

        self.send(request).await
    }

    /// Make a PUT request with a JSON body, optionally authenticated
    pub async fn put(&self, path: &str, body: &str, token: Option<&str>) -> (StatusCode, String) {
        let mut builder = Request::builder()
            .method("PUT")
            .uri(path)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

/// Fresh in-memory pool with migrations applied
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

fn test_config() -> AppConfig {
    AppConfig {
        server: fittrack_backend::config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: fittrack_backend::config::DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        gemini: fittrack_backend::config::GeminiConfig::default(),
    }
}

/// Create a user directly through the service layer
pub async fn seed_user(pool: &SqlitePool, username: &str, email: &str) -> i64 {
    let req = CreateUserRequest {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "salt:89a1df32".to_string(),
        profile: UserProfile::default(),
    };
    UserService::create_user(pool, &req)
        .await
        .expect("Failed to seed user")
}

/// Create a session for a user, valid for one hour
pub async fn seed_session(pool: &SqlitePool, user_id: i64, token: &str) {
    SessionService::create_session(pool, user_id, token, Utc::now() + Duration::hours(1))
        .await
        .expect("Failed to seed session");
}
