//! # InternTrack Config
//!
//! Configuration types for the InternTrack API, loaded from environment
//! variables (after `dotenvy` has populated them from `.env`).
//!
//! - [`jwt`]: Signing secret and per-principal token lifetimes
//! - [`cors`]: Cross-origin allow-list and development/production mode
//! - [`database`]: Connection string and pool sizing
//! - [`server`]: Listen address
//!
//! # Example
//!
//! ```ignore
//! use interntrack_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let database_config = DatabaseConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

pub use cors::{CorsConfig, CorsMode, DEV_ORIGINS};
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
