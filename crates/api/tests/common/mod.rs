#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use mumentum_api::auth::jwt::{Claims, JwtConfig, DEFAULT_AUDIENCE};
use mumentum_api::config::ServerConfig;
use mumentum_api::router::build_app_router;
use mumentum_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        database_max_connections: 5,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Sign a token the way the identity provider would.
pub fn token_for(user_id: Uuid) -> String {
    let claims = Claims {
        sub: user_id,
        exp: chrono::Utc::now().timestamp() + 900,
        aud: DEFAULT_AUDIENCE.to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, user_id: Uuid) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {}", token_for(user_id)))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn json_auth(
    app: Router,
    method: Method,
    uri: &str,
    user_id: Uuid,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token_for(user_id)))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    user_id: Uuid,
    body: serde_json::Value,
) -> Response<Body> {
    json_auth(app, Method::POST, uri, user_id, body).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    user_id: Uuid,
    body: serde_json::Value,
) -> Response<Body> {
    json_auth(app, Method::PATCH, uri, user_id, body).await
}

/// Map of question slug to id from the seeded catalog.
pub async fn question_ids(pool: &PgPool) -> std::collections::HashMap<String, i64> {
    sqlx::query_as::<_, (String, i64)>("SELECT slug, id FROM onboarding_questions")
        .fetch_all(pool)
        .await
        .unwrap()
        .into_iter()
        .collect()
}

/// Answer every required question for a currently pregnant user.
pub async fn complete_onboarding(pool: &PgPool, user_id: Uuid) {
    let ids = question_ids(pool).await;
    let answers = [
        ("mama-name", serde_json::json!("Asha")),
        ("mama-age", serde_json::json!("31")),
        ("mama-region", serde_json::json!("Mumbai, India")),
        ("pregnancy-status", serde_json::json!("Currently pregnant")),
        ("pregnancy-weeks", serde_json::json!("24")),
        ("medical-conditions", serde_json::json!(["Custom: PCOS"])),
        ("diet-style", serde_json::json!("Vegetarian")),
        ("has-doctor", serde_json::json!("No, not yet")),
    ];
    for (slug, response) in answers {
        let app = build_test_app(pool.clone());
        let res = post_json_auth(
            app,
            "/api/v1/onboarding/respond",
            user_id,
            serde_json::json!({"question_id": ids[slug], "response": response}),
        )
        .await;
        assert_eq!(res.status(), axum::http::StatusCode::CREATED, "answering {slug}");
    }
}
