use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use interntrack_core::AppError;
use interntrack_models::{CreateLogEntryDto, Intern, LogEntry};

use super::service::StudentService;
use crate::middleware::auth::StudentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

/// The authenticated student's own intern record
#[utoipa::path(
    get,
    path = "/api/student/profile",
    responses(
        (status = 200, description = "Own intern record", body = Intern),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Intern not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Student"
)]
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    student: StudentUser,
) -> Result<Json<Intern>, AppError> {
    let intern = StudentService::get_profile(state.repository.as_ref(), student.intern_id()).await?;
    Ok(Json(intern))
}

#[utoipa::path(
    get,
    path = "/api/student/interns/{intern_id}",
    params(
        ("intern_id" = Uuid, Path, description = "Intern ID; must be the caller's own")
    ),
    responses(
        (status = 200, description = "Own intern record", body = Intern),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Access denied", body = ErrorResponse),
        (status = 404, description = "Intern not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Student"
)]
#[instrument(skip(state))]
pub async fn get_intern(
    State(state): State<AppState>,
    student: StudentUser,
    ValidatedPath(intern_id): ValidatedPath<Uuid>,
) -> Result<Json<Intern>, AppError> {
    student.require_owner(&intern_id)?;

    let intern = StudentService::get_profile(state.repository.as_ref(), intern_id).await?;
    Ok(Json(intern))
}

#[utoipa::path(
    get,
    path = "/api/student/interns/{intern_id}/logs",
    params(
        ("intern_id" = Uuid, Path, description = "Intern ID; must be the caller's own")
    ),
    responses(
        (status = 200, description = "Own log entries, newest first", body = Vec<LogEntry>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Access denied", body = ErrorResponse),
        (status = 404, description = "Intern not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Student"
)]
#[instrument(skip(state))]
pub async fn list_logs(
    State(state): State<AppState>,
    student: StudentUser,
    ValidatedPath(intern_id): ValidatedPath<Uuid>,
) -> Result<Json<Vec<LogEntry>>, AppError> {
    student.require_owner(&intern_id)?;

    let logs = StudentService::list_logs(state.repository.as_ref(), intern_id).await?;
    Ok(Json(logs))
}

#[utoipa::path(
    post,
    path = "/api/student/interns/{intern_id}/logs",
    params(
        ("intern_id" = Uuid, Path, description = "Intern ID; must be the caller's own")
    ),
    request_body = CreateLogEntryDto,
    responses(
        (status = 201, description = "Log entry created", body = LogEntry),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Access denied", body = ErrorResponse),
        (status = 404, description = "Intern not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Student"
)]
#[instrument(skip(state, body))]
pub async fn create_log(
    State(state): State<AppState>,
    student: StudentUser,
    ValidatedPath(intern_id): ValidatedPath<Uuid>,
    body: Result<ValidatedJson<CreateLogEntryDto>, AppError>,
) -> Result<(StatusCode, Json<LogEntry>), AppError> {
    // Ownership is decided before the body is looked at.
    student.require_owner(&intern_id)?;
    let ValidatedJson(dto) = body?;

    let log = StudentService::create_log(state.repository.as_ref(), intern_id, dto).await?;
    Ok((StatusCode::CREATED, Json(log)))
}
