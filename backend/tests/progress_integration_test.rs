//! Integration tests for append-only progress tracking

mod common;

use axum::http::StatusCode;
use chrono::NaiveDate;
use fittrack_backend::error::ApiError;
use fittrack_backend::services::ProgressService;
use fittrack_shared::types::RecordProgressRequest;
use rstest::rstest;

fn entry(height_cm: f64, weight_kg: f64, date: (i32, u32, u32)) -> RecordProgressRequest {
    RecordProgressRequest {
        height_cm,
        weight_kg,
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
    }
}

#[tokio::test]
async fn test_n_records_yield_n_rows() {
    let pool = common::test_pool().await;
    let alice = common::seed_user(&pool, "alice", "a@x.com").await;

    let entries = [
        entry(170.0, 71.0, (2026, 7, 1)),
        entry(170.0, 70.4, (2026, 7, 8)),
        entry(170.0, 69.9, (2026, 7, 15)),
    ];
    for e in &entries {
        ProgressService::record_progress(&pool, alice, e).await.unwrap();
    }

    let metrics = ProgressService::body_metrics(&pool, alice).await.unwrap();
    assert_eq!(metrics.len(), entries.len());

    // Oldest first, values unchanged
    assert_eq!(metrics[0].weight_kg, 71.0);
    assert_eq!(metrics[2].weight_kg, 69.9);
}

#[tokio::test]
async fn test_history_is_immutable_under_new_inserts() {
    let pool = common::test_pool().await;
    let alice = common::seed_user(&pool, "alice", "a@x.com").await;

    ProgressService::record_progress(&pool, alice, &entry(170.0, 71.0, (2026, 7, 1)))
        .await
        .unwrap();
    let before = ProgressService::body_metrics(&pool, alice).await.unwrap();

    ProgressService::record_progress(&pool, alice, &entry(170.0, 70.0, (2026, 7, 8)))
        .await
        .unwrap();
    let after = ProgressService::body_metrics(&pool, alice).await.unwrap();

    // The earlier row is untouched by the later insert
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[0].weight_kg, before[0].weight_kg);
    assert_eq!(after[0].date, before[0].date);
}

#[rstest]
#[case(170.0, -70.0)] // negative weight
#[case(170.0, 900.0)] // weight out of range
#[case(20.0, 70.0)] // height out of range
#[tokio::test]
async fn test_out_of_range_measurements_rejected(#[case] height_cm: f64, #[case] weight_kg: f64) {
    let pool = common::test_pool().await;
    let alice = common::seed_user(&pool, "alice", "a@x.com").await;

    let err =
        ProgressService::record_progress(&pool, alice, &entry(height_cm, weight_kg, (2026, 7, 1)))
            .await
            .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_date_defaults_to_today() {
    let pool = common::test_pool().await;
    let alice = common::seed_user(&pool, "alice", "a@x.com").await;

    ProgressService::record_progress(
        &pool,
        alice,
        &RecordProgressRequest {
            height_cm: 170.0,
            weight_kg: 70.0,
            date: None,
        },
    )
    .await
    .unwrap();

    let metrics = ProgressService::body_metrics(&pool, alice).await.unwrap();
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].date, chrono::Utc::now().date_naive());
}

#[tokio::test]
async fn test_progress_over_http() {
    let app = common::TestApp::new().await;
    let alice = common::seed_user(&app.pool, "alice", "a@x.com").await;
    common::seed_session(&app.pool, alice, "tok-alice").await;

    let (status, _) = app
        .post(
            "/api/v1/progress",
            r#"{"height_cm": 170.0, "weight_kg": 70.5, "date": "2026-07-20"}"#,
            Some("tok-alice"),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get("/api/v1/progress", Some("tok-alice")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"weight_kg\":70.5"));
    assert!(body.contains("2026-07-20"));

    // Bad input surfaces as a validation error
    let (status, body) = app
        .post(
            "/api/v1/progress",
            r#"{"height_cm": 170.0, "weight_kg": -1.0}"#,
            Some("tok-alice"),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("VALIDATION_ERROR"));
}
