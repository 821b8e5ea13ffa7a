use async_trait::async_trait;
use interntrack_core::AppError;
use interntrack_models::{
    AdminAccount, AdminCredentials, Intern, InternChanges, InternCredentials, LogEntry, NewIntern,
    NewLogEntry,
};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated.
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Backend(anyhow::Error::from(err))
    }
}

impl StoreError {
    pub fn into_app_error(self) -> AppError {
        match self {
            StoreError::Conflict(message) => AppError::conflict(anyhow::anyhow!(message)),
            StoreError::Backend(err) => AppError::database(err),
        }
    }
}

/// Keyed access to admins, interns and their log entries.
///
/// Lookups return `Ok(None)` for a missing record; `Err` is reserved for
/// the store itself failing.
#[async_trait]
pub trait InternRepository: Send + Sync {
    async fn find_admin_by_id(&self, id: Uuid) -> Result<Option<AdminAccount>, StoreError>;

    async fn find_admin_credentials(
        &self,
        username: &str,
    ) -> Result<Option<AdminCredentials>, StoreError>;

    async fn find_intern_by_id(&self, id: Uuid) -> Result<Option<Intern>, StoreError>;

    async fn find_intern_credentials(
        &self,
        student_id: &str,
    ) -> Result<Option<InternCredentials>, StoreError>;

    async fn list_interns(&self) -> Result<Vec<Intern>, StoreError>;

    async fn create_intern(&self, intern: NewIntern) -> Result<Intern, StoreError>;

    async fn update_intern(
        &self,
        id: Uuid,
        changes: InternChanges,
    ) -> Result<Option<Intern>, StoreError>;

    /// Removes the intern and all of its log entries.
    async fn delete_intern(&self, id: Uuid) -> Result<bool, StoreError>;

    /// All log entries, newest first.
    async fn list_logs(&self) -> Result<Vec<LogEntry>, StoreError>;

    /// One intern's log entries, newest first.
    async fn list_logs_for_intern(&self, intern_id: Uuid) -> Result<Vec<LogEntry>, StoreError>;

    async fn create_log(&self, entry: NewLogEntry) -> Result<LogEntry, StoreError>;
}
