//! Integration tests for the daily health log endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "../../db/migrations")]
async fn latest_is_null_before_logging(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/health-tracking/latest", Uuid::new_v4()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logging_twice_a_day_replaces_the_entry(pool: PgPool) {
    let user = Uuid::new_v4();

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/health-tracking",
        user,
        json!({
            "blood_pressure_systolic": 118,
            "blood_pressure_diastolic": 76,
            "symptoms": [" nausea", "nausea", "fatigue"],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["symptoms"], json!(["nausea", "fatigue"]));

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/health-tracking",
        user,
        json!({"weight_kg": 64.5, "mood": "calm"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/health-tracking/latest", user).await).await;
    assert_eq!(json["data"]["mood"], "calm");
    assert_eq!(json["data"]["weight_kg"], 64.5);
    assert!(json["data"]["blood_pressure_systolic"].is_null());

    let app = common::build_test_app(pool);
    let json =
        body_json(get_auth(app, "/api/v1/health-tracking/history?days=7", user).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn implausible_vitals_are_rejected(pool: PgPool) {
    let user = Uuid::new_v4();

    for body in [
        json!({"blood_pressure_systolic": 300}),
        json!({"blood_pressure_systolic": 90, "blood_pressure_diastolic": 95}),
        json!({"weight_kg": 3.0}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(app, "/api/v1/health-tracking", user, body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn history_is_newest_first_and_clamped(pool: PgPool) {
    let user = Uuid::new_v4();
    for offset in 1..=3 {
        sqlx::query(
            "INSERT INTO health_tracking (user_id, entry_date, mood) \
             VALUES ($1, CURRENT_DATE - $2::int, 'ok')",
        )
        .bind(user)
        .bind(offset)
        .execute(&pool)
        .await
        .unwrap();
    }

    let app = common::build_test_app(pool.clone());
    let json =
        body_json(get_auth(app, "/api/v1/health-tracking/history?days=0", user).await).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/health-tracking/history", user).await).await;
    let dates: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["entry_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates.len(), 3);
    assert!(dates.windows(2).all(|w| w[0] > w[1]));
}
