use anyhow::anyhow;
use tracing::instrument;
use uuid::Uuid;

use interntrack_core::AppError;
use interntrack_db::{InternRepository, StoreError};
use interntrack_models::{CreateLogEntryDto, Intern, LogEntry, NewLogEntry};

/// Operations on the authenticated student's own records. Callers check
/// ownership before reaching this service.
pub struct StudentService;

impl StudentService {
    #[instrument(skip(repository))]
    pub async fn get_profile(
        repository: &dyn InternRepository,
        intern_id: Uuid,
    ) -> Result<Intern, AppError> {
        // a valid token can outlive its intern record
        repository
            .find_intern_by_id(intern_id)
            .await
            .map_err(StoreError::into_app_error)?
            .ok_or_else(|| AppError::not_found(anyhow!("Intern not found")))
    }

    #[instrument(skip(repository))]
    pub async fn list_logs(
        repository: &dyn InternRepository,
        intern_id: Uuid,
    ) -> Result<Vec<LogEntry>, AppError> {
        Self::get_profile(repository, intern_id).await?;

        repository
            .list_logs_for_intern(intern_id)
            .await
            .map_err(StoreError::into_app_error)
    }

    #[instrument(skip(repository, dto), fields(log_date = %dto.log_date))]
    pub async fn create_log(
        repository: &dyn InternRepository,
        intern_id: Uuid,
        dto: CreateLogEntryDto,
    ) -> Result<LogEntry, AppError> {
        Self::get_profile(repository, intern_id).await?;

        let log = repository
            .create_log(NewLogEntry::from_dto(intern_id, dto))
            .await
            .map_err(StoreError::into_app_error)?;

        tracing::info!(log_id = %log.id, "Log entry created");
        Ok(log)
    }
}
