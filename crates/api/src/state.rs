use std::sync::Arc;

use mumentum_db::store::PgOnboardingStore;
use mumentum_core::onboarding::OnboardingService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool and the config are both reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: mumentum_db::DbPool,
    /// Server configuration (read by the auth extractor).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Onboarding service wired to this state's pool.
    pub fn onboarding(&self) -> OnboardingService<PgOnboardingStore> {
        OnboardingService::new(PgOnboardingStore::new(self.pool.clone()))
    }
}
