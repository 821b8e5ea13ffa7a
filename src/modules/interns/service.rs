use anyhow::anyhow;
use chrono::NaiveDate;
use tracing::instrument;
use uuid::Uuid;

use interntrack_core::{AppError, hash_password};
use interntrack_db::{InternRepository, StoreError};
use interntrack_models::{
    CreateInternDto, Intern, InternChanges, LogEntry, NewIntern, UpdateInternDto,
};

fn intern_not_found() -> AppError {
    AppError::not_found(anyhow!("Intern not found"))
}

fn check_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), AppError> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(AppError::unprocessable(anyhow!(
            "end_date must not be before start_date"
        ))),
        _ => Ok(()),
    }
}

pub struct InternService;

impl InternService {
    #[instrument(skip(repository))]
    pub async fn list_interns(repository: &dyn InternRepository) -> Result<Vec<Intern>, AppError> {
        repository
            .list_interns()
            .await
            .map_err(StoreError::into_app_error)
    }

    #[instrument(skip(repository, dto), fields(student_id = %dto.student_id))]
    pub async fn create_intern(
        repository: &dyn InternRepository,
        dto: CreateInternDto,
    ) -> Result<Intern, AppError> {
        check_date_range(dto.start_date, dto.end_date)?;

        let password_hash = hash_password(&dto.password)?;

        let intern = repository
            .create_intern(NewIntern {
                student_id: dto.student_id,
                first_name: dto.first_name,
                last_name: dto.last_name,
                email: dto.email,
                company: dto.company,
                department: dto.department,
                start_date: dto.start_date,
                end_date: dto.end_date,
                password_hash,
            })
            .await
            .map_err(StoreError::into_app_error)?;

        tracing::info!(intern_id = %intern.id, "Intern created");
        Ok(intern)
    }

    #[instrument(skip(repository))]
    pub async fn get_intern(
        repository: &dyn InternRepository,
        id: Uuid,
    ) -> Result<Intern, AppError> {
        repository
            .find_intern_by_id(id)
            .await
            .map_err(StoreError::into_app_error)?
            .ok_or_else(intern_not_found)
    }

    #[instrument(skip(repository, dto))]
    pub async fn update_intern(
        repository: &dyn InternRepository,
        id: Uuid,
        dto: UpdateInternDto,
    ) -> Result<Intern, AppError> {
        let existing = Self::get_intern(repository, id).await?;
        check_date_range(
            dto.start_date.or(existing.start_date),
            dto.end_date.or(existing.end_date),
        )?;

        let password_hash = dto.password.as_deref().map(hash_password).transpose()?;

        let changes = InternChanges {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            company: dto.company,
            department: dto.department,
            start_date: dto.start_date,
            end_date: dto.end_date,
            password_hash,
        };

        repository
            .update_intern(id, changes)
            .await
            .map_err(StoreError::into_app_error)?
            .ok_or_else(intern_not_found)
    }

    #[instrument(skip(repository))]
    pub async fn delete_intern(repository: &dyn InternRepository, id: Uuid) -> Result<(), AppError> {
        let deleted = repository
            .delete_intern(id)
            .await
            .map_err(StoreError::into_app_error)?;

        if !deleted {
            return Err(intern_not_found());
        }

        tracing::info!(intern_id = %id, "Intern deleted");
        Ok(())
    }

    #[instrument(skip(repository))]
    pub async fn get_intern_logs(
        repository: &dyn InternRepository,
        intern_id: Uuid,
    ) -> Result<Vec<LogEntry>, AppError> {
        Self::get_intern(repository, intern_id).await?;

        repository
            .list_logs_for_intern(intern_id)
            .await
            .map_err(StoreError::into_app_error)
    }

    #[instrument(skip(repository))]
    pub async fn list_all_logs(repository: &dyn InternRepository) -> Result<Vec<LogEntry>, AppError> {
        repository
            .list_logs()
            .await
            .map_err(StoreError::into_app_error)
    }
}
