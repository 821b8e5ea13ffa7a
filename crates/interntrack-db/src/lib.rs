//! # InternTrack DB
//!
//! Persistence for the InternTrack API.
//!
//! Handlers never touch a connection directly: they receive an
//! [`InternRepository`] trait object through application state. The
//! production implementation ([`PgInternRepository`]) owns a lazily
//! connecting SQLx pool; the in-memory implementation
//! ([`MemoryInternRepository`], `test-utils` feature) backs the test suite.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use interntrack_config::DatabaseConfig;
//! use interntrack_db::{InternRepository, PgInternRepository, init_db_pool};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env())?;
//! let repository: Arc<dyn InternRepository> = Arc::new(PgInternRepository::new(pool));
//! ```

#[cfg(feature = "test-utils")]
pub mod memory;
pub mod postgres;
pub mod repository;

#[cfg(feature = "test-utils")]
pub use memory::MemoryInternRepository;
pub use postgres::PgInternRepository;
pub use repository::{InternRepository, StoreError};

use interntrack_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

/// Builds a PostgreSQL pool that opens connections on first use.
///
/// Only the connection string is checked here, so the server can start
/// (and answer preflights and auth failures) before the database is
/// reachable.
pub fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy(&config.url)
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
