//! Integration tests for treatment recommendations.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

fn recommendation(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "description": "Raised after your last blood pressure log.",
        "risk_level": "high",
        "category": "Cardiovascular",
        "recommended_actions": ["Re-measure tonight", "  ", "Call your clinic if above 140/90"],
    })
}

async fn create(pool: &PgPool, user: Uuid, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/treatment-recommendations", user, body).await;
    let status = response.status();
    (status, body_json(response).await)
}

async fn active_titles(pool: &PgPool, user: Uuid) -> Vec<String> {
    let app = common::build_test_app(pool.clone());
    let json = body_json(get_auth(app, "/api/v1/treatment-recommendations", user).await).await;
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap().to_string())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn created_recommendation_is_listed(pool: PgPool) {
    let user = Uuid::new_v4();
    let (status, json) = create(&pool, user, recommendation("Monitor blood pressure")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["risk_level"], "high");
    assert_eq!(json["data"]["acknowledged"], false);
    assert_eq!(json["data"]["recommended_actions"].as_array().unwrap().len(), 2);

    assert_eq!(active_titles(&pool, user).await, vec!["Monitor blood pressure"]);
    assert!(active_titles(&pool, Uuid::new_v4()).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn acknowledged_recommendation_disappears(pool: PgPool) {
    let user = Uuid::new_v4();
    let (_, first) = create(&pool, user, recommendation("First")).await;
    create(&pool, user, recommendation("Second")).await;
    let id = first["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/treatment-recommendations/{id}/acknowledge");
    let response = post_json_auth(app, &uri, user, json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["acknowledged"], true);

    assert_eq!(active_titles(&pool, user).await, vec!["Second"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn acknowledging_someone_elses_recommendation_is_not_found(pool: PgPool) {
    let owner = Uuid::new_v4();
    let (_, created) = create(&pool, owner, recommendation("Owner only")).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let uri = format!("/api/v1/treatment-recommendations/{id}/acknowledge");
    let response = post_json_auth(app, &uri, Uuid::new_v4(), json!({})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(active_titles(&pool, owner).await, vec!["Owner only"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_recommendations_are_rejected(pool: PgPool) {
    let user = Uuid::new_v4();

    let mut blank = recommendation("   ");
    blank["risk_level"] = json!("low");
    let (status, json) = create(&pool, user, blank).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let mut expired = recommendation("Too late");
    expired["expires_at"] = json!("2020-01-01T00:00:00Z");
    let (status, _) = create(&pool, user, expired).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(active_titles(&pool, user).await.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_risk_level_is_unprocessable(pool: PgPool) {
    let mut body = recommendation("Check ferritin");
    body["risk_level"] = json!("moderate");

    let app = common::build_test_app(pool);
    let response =
        post_json_auth(app, "/api/v1/treatment-recommendations", Uuid::new_v4(), body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
