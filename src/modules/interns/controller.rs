use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use interntrack_core::AppError;
use interntrack_models::{CreateInternDto, Intern, LogEntry, UpdateInternDto};

use super::service::InternService;
use crate::middleware::auth::AdminUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

#[utoipa::path(
    get,
    path = "/api/admin/interns",
    responses(
        (status = 200, description = "All interns", body = Vec<Intern>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []), ("cookie_auth" = [])),
    tag = "Interns"
)]
#[instrument(skip(state))]
pub async fn list_interns(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<Intern>>, AppError> {
    let interns = InternService::list_interns(state.repository.as_ref()).await?;
    Ok(Json(interns))
}

#[utoipa::path(
    post,
    path = "/api/admin/interns",
    request_body = CreateInternDto,
    responses(
        (status = 201, description = "Intern created", body = Intern),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "Student ID or email already in use", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []), ("cookie_auth" = [])),
    tag = "Interns"
)]
#[instrument(skip(state, admin, dto), fields(admin_id = %admin.user_id()))]
pub async fn create_intern(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(dto): ValidatedJson<CreateInternDto>,
) -> Result<(StatusCode, Json<Intern>), AppError> {
    let intern = InternService::create_intern(state.repository.as_ref(), dto).await?;
    Ok((StatusCode::CREATED, Json(intern)))
}

#[utoipa::path(
    get,
    path = "/api/admin/interns/{id}",
    params(
        ("id" = Uuid, Path, description = "Intern ID")
    ),
    responses(
        (status = 200, description = "Intern details", body = Intern),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Intern not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []), ("cookie_auth" = [])),
    tag = "Interns"
)]
#[instrument(skip(state))]
pub async fn get_intern(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<Intern>, AppError> {
    let intern = InternService::get_intern(state.repository.as_ref(), id).await?;
    Ok(Json(intern))
}

#[utoipa::path(
    put,
    path = "/api/admin/interns/{id}",
    params(
        ("id" = Uuid, Path, description = "Intern ID")
    ),
    request_body = UpdateInternDto,
    responses(
        (status = 200, description = "Intern updated", body = Intern),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Intern not found", body = ErrorResponse),
        (status = 409, description = "Email already in use", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []), ("cookie_auth" = [])),
    tag = "Interns"
)]
#[instrument(skip(state, admin, dto), fields(admin_id = %admin.user_id()))]
pub async fn update_intern(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateInternDto>,
) -> Result<Json<Intern>, AppError> {
    let intern = InternService::update_intern(state.repository.as_ref(), id, dto).await?;
    Ok(Json(intern))
}

#[utoipa::path(
    delete,
    path = "/api/admin/interns/{id}",
    params(
        ("id" = Uuid, Path, description = "Intern ID")
    ),
    responses(
        (status = 204, description = "Intern and its logs deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Intern not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []), ("cookie_auth" = [])),
    tag = "Interns"
)]
#[instrument(skip(state, admin), fields(admin_id = %admin.user_id()))]
pub async fn delete_intern(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<StatusCode, AppError> {
    InternService::delete_intern(state.repository.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/admin/interns/{id}/logs",
    params(
        ("id" = Uuid, Path, description = "Intern ID")
    ),
    responses(
        (status = 200, description = "The intern's log entries, newest first", body = Vec<LogEntry>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Intern not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []), ("cookie_auth" = [])),
    tag = "Interns"
)]
#[instrument(skip(state))]
pub async fn get_intern_logs(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<Vec<LogEntry>>, AppError> {
    let logs = InternService::get_intern_logs(state.repository.as_ref(), id).await?;
    Ok(Json(logs))
}

#[utoipa::path(
    get,
    path = "/api/admin/logs",
    responses(
        (status = 200, description = "Every log entry, newest first", body = Vec<LogEntry>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []), ("cookie_auth" = [])),
    tag = "Logs"
)]
#[instrument(skip(state))]
pub async fn list_all_logs(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<LogEntry>>, AppError> {
    let logs = InternService::list_all_logs(state.repository.as_ref()).await?;
    Ok(Json(logs))
}
