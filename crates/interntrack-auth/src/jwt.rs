//! JWT issuance and verification for both principal kinds.
//!
//! Verification is a pure function of the token, the shared secret and the
//! clock: there is no revocation list and no store lookup. The `*_at`
//! variants take the clock explicitly so expiry boundaries can be tested.
//!
//! # Example
//!
//! ```ignore
//! use interntrack_auth::{StudentPrincipal, create_token, verify_token};
//!
//! let token = create_token(&StudentPrincipal { intern_id, student_id: "S-1042".into() }, &config)?;
//! let principal: Option<StudentPrincipal> = verify_token(&token, &config);
//! ```

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use interntrack_config::JwtConfig;
use interntrack_core::AppError;

use crate::claims::{AdminPrincipal, Principal, PrincipalKind, StudentPrincipal, TokenClaims};

/// Why a token was rejected. Only used for logging; every variant maps to
/// the same unauthorized outcome for the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token: {0}")]
    Malformed(String),
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("expected a {expected} token but got a {found} token")]
    WrongKind {
        expected: PrincipalKind,
        found: PrincipalKind,
    },
}

/// Signed payload before the principal fields are interpreted.
#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: PrincipalKind,
    exp: i64,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

fn validation() -> Validation {
    // Expiry is checked against the caller's clock in `decode_token_at`.
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.leeway = 0;
    validation
}

/// Creates a token for `principal`, expiring after the lifetime configured
/// for its kind.
pub fn create_token<P: Principal>(principal: &P, jwt_config: &JwtConfig) -> Result<String, AppError> {
    create_token_at(principal, jwt_config, Utc::now().timestamp())
}

/// Creates a token as if issued at `issued_at` (Unix seconds).
pub fn create_token_at<P: Principal>(
    principal: &P,
    jwt_config: &JwtConfig,
    issued_at: i64,
) -> Result<String, AppError> {
    let claims = TokenClaims {
        principal,
        kind: P::KIND,
        iat: issued_at,
        exp: issued_at + P::token_lifetime(jwt_config),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Decodes a token of kind `P` at time `now`, reporting the exact failure.
///
/// A token is accepted while `now <= exp`.
pub fn decode_token_at<P: Principal>(
    token: &str,
    jwt_config: &JwtConfig,
    now: i64,
) -> Result<P, TokenError> {
    let envelope = decode::<Envelope>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed(e.to_string()),
    })?;

    if envelope.kind != P::KIND {
        return Err(TokenError::WrongKind {
            expected: P::KIND,
            found: envelope.kind,
        });
    }

    if now > envelope.exp {
        return Err(TokenError::Expired);
    }

    serde_json::from_value(Value::Object(envelope.fields))
        .map_err(|e| TokenError::Malformed(e.to_string()))
}

/// Decodes a token of kind `P` against the current time.
pub fn decode_token<P: Principal>(token: &str, jwt_config: &JwtConfig) -> Result<P, TokenError> {
    decode_token_at(token, jwt_config, Utc::now().timestamp())
}

/// Verifies a token of kind `P` at time `now`. Never panics; every failure
/// is `None`.
pub fn verify_token_at<P: Principal>(token: &str, jwt_config: &JwtConfig, now: i64) -> Option<P> {
    match decode_token_at::<P>(token, jwt_config, now) {
        Ok(principal) => Some(principal),
        Err(err) => {
            tracing::debug!(kind = %P::KIND, error = %err, "Token rejected");
            None
        }
    }
}

/// Verifies a token of kind `P` against the current time.
pub fn verify_token<P: Principal>(token: &str, jwt_config: &JwtConfig) -> Option<P> {
    verify_token_at(token, jwt_config, Utc::now().timestamp())
}

pub fn verify_admin_token(token: &str, jwt_config: &JwtConfig) -> Option<AdminPrincipal> {
    verify_token(token, jwt_config)
}

pub fn verify_student_token(token: &str, jwt_config: &JwtConfig) -> Option<StudentPrincipal> {
    verify_token(token, jwt_config)
}
