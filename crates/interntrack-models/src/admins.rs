use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A dashboard operator account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AdminAccount {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// An admin account together with its bcrypt hash.
#[derive(Debug, Clone, FromRow)]
pub struct AdminCredentials {
    #[sqlx(flatten)]
    pub account: AdminAccount,
    pub password_hash: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 1, max = 100, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminLoginResponse {
    pub token: String,
    pub user: AdminAccount,
}
