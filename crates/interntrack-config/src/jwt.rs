use std::env;

/// Default signing secret. Must be overridden in any shared deployment.
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// HMAC secret shared by admin and student tokens. Every replica must
    /// use the same value or previously issued tokens stop verifying.
    pub secret: String,
    /// Admin token lifetime in seconds
    pub admin_token_expiry: i64,
    /// Student token lifetime in seconds
    pub student_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            admin_token_expiry: env::var("JWT_ADMIN_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800), // 7 days
            student_token_expiry: env::var("JWT_STUDENT_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2592000), // 30 days
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}
