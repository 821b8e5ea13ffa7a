use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use interntrack_auth::{
    AdminPrincipal, StudentPrincipal, validate_student_access, verify_admin_token,
    verify_student_token,
};
use interntrack_config::JwtConfig;
use interntrack_core::AppError;

use crate::state::AppState;

/// Cookie the admin dashboard stores its token in.
pub const AUTH_COOKIE: &str = "auth-token";

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

fn cookie_token(headers: &HeaderMap) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(AUTH_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Resolves the admin behind a request.
///
/// A bearer header wins when present; the cookie is only consulted when
/// there is no usable header. Returns `None` for any failure.
pub fn authenticate_admin(headers: &HeaderMap, jwt_config: &JwtConfig) -> Option<AdminPrincipal> {
    let token = bearer_token(headers).or_else(|| cookie_token(headers))?;
    verify_admin_token(&token, jwt_config)
}

/// Resolves the student behind a request. Only the bearer header is
/// accepted.
pub fn authenticate_student(
    headers: &HeaderMap,
    jwt_config: &JwtConfig,
) -> Option<StudentPrincipal> {
    let token = bearer_token(headers)?;
    verify_student_token(&token, jwt_config)
}

/// Extractor for dashboard routes.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AdminPrincipal);

impl AdminUser {
    pub fn user_id(&self) -> Uuid {
        self.0.user_id
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate_admin(&parts.headers, &state.jwt_config)
            .map(AdminUser)
            .ok_or_else(|| {
                tracing::debug!(path = %parts.uri.path(), "Admin authentication failed");
                AppError::authentication_required()
            })
    }
}

/// Extractor for mobile app routes.
#[derive(Debug, Clone)]
pub struct StudentUser(pub StudentPrincipal);

impl StudentUser {
    pub fn intern_id(&self) -> Uuid {
        self.0.intern_id
    }

    pub fn student_id(&self) -> &str {
        &self.0.student_id
    }

    /// Rejects with 403 unless `intern_id` is the caller's own.
    pub fn require_owner(&self, intern_id: &Uuid) -> Result<(), AppError> {
        if validate_student_access(&self.0, intern_id) {
            Ok(())
        } else {
            tracing::warn!(
                student_id = %self.0.student_id,
                requested_intern_id = %intern_id,
                "Student attempted to access another intern's records"
            );
            Err(AppError::access_denied())
        }
    }
}

impl FromRequestParts<AppState> for StudentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate_student(&parts.headers, &state.jwt_config)
            .map(StudentUser)
            .ok_or_else(|| {
                tracing::debug!(path = %parts.uri.path(), "Student authentication failed");
                AppError::authentication_required()
            })
    }
}
