//! Integration tests for the profile endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, patch_json_auth};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_profile_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/profile", Uuid::new_v4()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_merges_only_editable_fields(pool: PgPool) {
    let user = Uuid::new_v4();

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        "/api/v1/profile",
        user,
        json!({"updates": {"preferred_name": "Asha", "country": "India"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        "/api/v1/profile",
        user,
        json!({"updates": {"country": "Singapore", "weeks_pregnant": 40, "user_id": "forged"}}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["user_id"], user.to_string());
    assert_eq!(
        json["data"]["fields"],
        json!({"preferred_name": "Asha", "country": "Singapore"})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn patch_without_editable_fields_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        "/api/v1/profile",
        Uuid::new_v4(),
        json!({"updates": {"pregnancy_status": "Currently pregnant"}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn profiles_are_isolated_per_user(pool: PgPool) {
    let (asha, bea) = (Uuid::new_v4(), Uuid::new_v4());

    let app = common::build_test_app(pool.clone());
    patch_json_auth(app, "/api/v1/profile", asha, json!({"updates": {"age": 31}})).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/profile", bea).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
