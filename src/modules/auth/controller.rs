use anyhow::anyhow;
use axum::{Json, extract::State};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::instrument;
use utoipa::ToSchema;

use interntrack_core::AppError;
use interntrack_models::{
    AdminAccount, AdminLoginRequest, AdminLoginResponse, MessageResponse, StudentLoginRequest,
    StudentLoginResponse,
};

use super::service::AuthService;
use crate::middleware::auth::{AUTH_COOKIE, AdminUser};
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

fn auth_cookie(token: &str, max_age_seconds: i64) -> Result<Cookie<'static>, AppError> {
    Cookie::parse(format!(
        "{AUTH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_seconds}"
    ))
    .map_err(|e| AppError::internal(anyhow!("Failed to build auth cookie: {}", e)))
}

/// Admin login; the token is returned in the body and set as a cookie
#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AdminLoginResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Admin Auth"
)]
#[instrument(skip(state, jar, dto))]
pub async fn admin_login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<AdminLoginRequest>,
) -> Result<(CookieJar, Json<AdminLoginResponse>), AppError> {
    let response =
        AuthService::login_admin(state.repository.as_ref(), dto, &state.jwt_config).await?;
    let cookie = auth_cookie(&response.token, state.jwt_config.admin_token_expiry)?;

    Ok((jar.add(cookie), Json(response)))
}

/// Clear the admin auth cookie
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    responses(
        (status = 200, description = "Cookie cleared", body = MessageResponse)
    ),
    tag = "Admin Auth"
)]
#[instrument(skip(jar))]
pub async fn admin_logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build(AUTH_COOKIE).path("/"));
    (
        jar,
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}

/// Current admin's account
#[utoipa::path(
    get,
    path = "/api/admin/me",
    responses(
        (status = 200, description = "Admin account", body = AdminAccount),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []), ("cookie_auth" = [])),
    tag = "Admin Auth"
)]
#[instrument(skip(state))]
pub async fn admin_me(
    State(state): State<AppState>,
    admin: AdminUser,
) -> Result<Json<AdminAccount>, AppError> {
    let account = AuthService::get_admin_profile(state.repository.as_ref(), admin.user_id()).await?;
    Ok(Json(account))
}

/// Student login from the mobile app
#[utoipa::path(
    post,
    path = "/api/student/login",
    request_body = StudentLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = StudentLoginResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Student Auth"
)]
#[instrument(skip(state, dto))]
pub async fn student_login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<StudentLoginRequest>,
) -> Result<Json<StudentLoginResponse>, AppError> {
    let response =
        AuthService::login_student(state.repository.as_ref(), dto, &state.jwt_config).await?;
    Ok(Json(response))
}
