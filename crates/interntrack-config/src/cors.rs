//! Cross-origin policy.
//!
//! A request origin is echoed back when it is on the configured allow-list
//! or is one of the [`DEV_ORIGINS`]. Any other origin gets a wildcard in
//! development mode and no allow-origin header at all in production.

use std::env;

/// Local origins used by the dashboard and mobile app dev servers.
pub const DEV_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:3001",
    "http://localhost:5173",
    "http://localhost:8081",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CorsMode {
    Development,
    Production,
}

impl CorsMode {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => CorsMode::Production,
            _ => CorsMode::Development,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub mode: CorsMode,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|value| parse_origins(&value))
            .unwrap_or_default();

        let mode = env::var("APP_ENV")
            .map(|value| CorsMode::parse(&value))
            .unwrap_or(CorsMode::Development);

        Self {
            allowed_origins,
            mode,
        }
    }

    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin) || DEV_ORIGINS.contains(&origin)
    }

    /// Value for `Access-Control-Allow-Origin`, or `None` when the header
    /// must be omitted.
    pub fn allow_origin_for(&self, origin: Option<&str>) -> Option<String> {
        match origin {
            Some(origin) if self.is_origin_allowed(origin) => Some(origin.to_string()),
            _ => match self.mode {
                CorsMode::Development => Some("*".to_string()),
                CorsMode::Production => None,
            },
        }
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().trim_end_matches('/').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
