//! Principal types and the JWT payload that embeds them.
//!
//! A token payload is the principal's own fields flattened next to the
//! registered claims:
//!
//! ```json
//! { "userId": "…", "username": "ops", "type": "admin", "iat": 1700000000, "exp": 1700604800 }
//! { "internId": "…", "studentId": "S-1042", "type": "student", "iat": 1700000000, "exp": 1702592000 }
//! ```

use std::fmt;

use interntrack_config::JwtConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Discriminator stored in the `type` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    Admin,
    Student,
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrincipalKind::Admin => f.write_str("admin"),
            PrincipalKind::Student => f.write_str("student"),
        }
    }
}

/// An identity a token can be issued for.
pub trait Principal: Serialize + DeserializeOwned + Clone {
    const KIND: PrincipalKind;

    /// Token lifetime in seconds for this kind.
    fn token_lifetime(config: &JwtConfig) -> i64;
}

/// A dashboard operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPrincipal {
    pub user_id: Uuid,
    pub username: String,
}

impl Principal for AdminPrincipal {
    const KIND: PrincipalKind = PrincipalKind::Admin;

    fn token_lifetime(config: &JwtConfig) -> i64 {
        config.admin_token_expiry
    }
}

/// A student/intern using the mobile app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPrincipal {
    pub intern_id: Uuid,
    pub student_id: String,
}

impl Principal for StudentPrincipal {
    const KIND: PrincipalKind = PrincipalKind::Student;

    fn token_lifetime(config: &JwtConfig) -> i64 {
        config.student_token_expiry
    }
}

/// Payload signed into every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims<P> {
    #[serde(flatten)]
    pub principal: P,
    /// Principal kind discriminator
    #[serde(rename = "type")]
    pub kind: PrincipalKind,
    /// Issued-at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}
