use std::fmt;
use std::sync::Arc;

use interntrack_config::{CorsConfig, DatabaseConfig, JwtConfig};
use interntrack_db::{InternRepository, PgInternRepository, init_db_pool};

/// Shared state handed to every handler.
///
/// The repository is injected rather than reached through a global, so the
/// same router runs against PostgreSQL in production and an in-memory
/// store in tests.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn InternRepository>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn InternRepository>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            repository,
            jwt_config,
            cors_config,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}

/// Builds state from the environment. The pool connects lazily, so this
/// only fails on an unparseable `DATABASE_URL`.
pub fn init_app_state() -> anyhow::Result<AppState> {
    let pool = init_db_pool(&DatabaseConfig::from_env())?;

    Ok(AppState::new(
        Arc::new(PgInternRepository::new(pool)),
        JwtConfig::from_env(),
        CorsConfig::from_env(),
    ))
}
