//! PostgreSQL persistence for the Mum.entum backend.
//!
//! - [`models`] -- `FromRow` row structs and request DTOs.
//! - [`repositories`] -- zero-sized repos with async query methods.
//! - [`store`] -- the [`mumentum_core::store::OnboardingStore`] implementation.

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Migrations embedded from `db/migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations");

/// Apply the embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Newest migration version compiled into this binary.
pub fn expected_schema_version() -> Option<i64> {
    MIGRATOR.iter().map(|m| m.version).max()
}

/// Migration and catalog state of a live database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaStatus {
    /// Newest successfully applied migration, `None` on a fresh database.
    pub applied_version: Option<i64>,
    /// Rows in `onboarding_questions`.
    pub catalog_questions: i64,
}

impl SchemaStatus {
    /// Every embedded migration has been applied.
    pub fn is_current(&self) -> bool {
        self.applied_version.is_some() && self.applied_version >= expected_schema_version()
    }
}

/// Read the applied migration version and the size of the question catalog.
///
/// Fails when either table is missing, i.e. migrations never ran.
pub async fn schema_status(pool: &DbPool) -> Result<SchemaStatus, sqlx::Error> {
    let (applied_version,): (Option<i64>,) =
        sqlx::query_as("SELECT MAX(version) FROM _sqlx_migrations WHERE success")
            .fetch_one(pool)
            .await?;
    let (catalog_questions,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM onboarding_questions")
        .fetch_one(pool)
        .await?;

    Ok(SchemaStatus {
        applied_version,
        catalog_questions,
    })
}
