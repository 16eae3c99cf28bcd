//! Readiness report at `/health`, outside `/api/v1` and without auth.
//!
//! The service is only useful once migrations have run and the question
//! catalog is seeded, so both are reported next to plain reachability.
//! Anything short of that answers 503 so a load balancer holds traffic.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when ready to serve onboarding, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseReport,
}

#[derive(Debug, Serialize)]
pub struct DatabaseReport {
    pub reachable: bool,
    /// Newest applied migration, `null` if none ran.
    pub schema_version: Option<i64>,
    /// Newest migration this build ships.
    pub expected_schema_version: Option<i64>,
    pub schema_current: bool,
    pub catalog_questions: i64,
    pub catalog_loaded: bool,
}

impl DatabaseReport {
    fn ready(&self) -> bool {
        self.reachable && self.schema_current && self.catalog_loaded
    }
}

async fn database_report(pool: &mumentum_db::DbPool) -> DatabaseReport {
    let expected_schema_version = mumentum_db::expected_schema_version();

    match mumentum_db::schema_status(pool).await {
        Ok(status) => DatabaseReport {
            reachable: true,
            schema_version: status.applied_version,
            expected_schema_version,
            schema_current: status.is_current(),
            catalog_questions: status.catalog_questions,
            catalog_loaded: status.catalog_questions > 0,
        },
        Err(err) => {
            // A reachable database without our tables has not been migrated.
            let reachable = mumentum_db::health_check(pool).await.is_ok();
            tracing::warn!(error = %err, reachable, "Schema status unavailable");
            DatabaseReport {
                reachable,
                schema_version: None,
                expected_schema_version,
                schema_current: false,
                catalog_questions: 0,
                catalog_loaded: false,
            }
        }
    }
}

async fn health_report(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let database = database_report(&state.pool).await;
    let (code, status) = if database.ready() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthReport {
            status,
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_report))
}
