use async_trait::async_trait;
use interntrack_models::{
    AdminAccount, AdminCredentials, Intern, InternChanges, InternCredentials, LogEntry, NewIntern,
    NewLogEntry,
};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::repository::{InternRepository, StoreError};

const INTERN_COLUMNS: &str = "id, student_id, first_name, last_name, email, company, department, \
     start_date, end_date, created_at, updated_at";

const LOG_COLUMNS: &str = "id, intern_id, log_date, hours, tasks, remarks, created_at";

/// [`InternRepository`] backed by PostgreSQL.
#[derive(Clone, Debug)]
pub struct PgInternRepository {
    pool: PgPool,
}

impl PgInternRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(err: sqlx::Error, what: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::Conflict(format!("{} already exists", what));
        }
    }
    StoreError::from(err)
}

#[async_trait]
impl InternRepository for PgInternRepository {
    #[instrument(skip(self))]
    async fn find_admin_by_id(&self, id: Uuid) -> Result<Option<AdminAccount>, StoreError> {
        let admin = sqlx::query_as::<_, AdminAccount>(
            "SELECT id, username, created_at FROM admins WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    #[instrument(skip(self))]
    async fn find_admin_credentials(
        &self,
        username: &str,
    ) -> Result<Option<AdminCredentials>, StoreError> {
        let credentials = sqlx::query_as::<_, AdminCredentials>(
            "SELECT id, username, created_at, password_hash FROM admins WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credentials)
    }

    #[instrument(skip(self))]
    async fn find_intern_by_id(&self, id: Uuid) -> Result<Option<Intern>, StoreError> {
        let intern = sqlx::query_as::<_, Intern>(&format!(
            "SELECT {INTERN_COLUMNS} FROM interns WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(intern)
    }

    #[instrument(skip(self))]
    async fn find_intern_credentials(
        &self,
        student_id: &str,
    ) -> Result<Option<InternCredentials>, StoreError> {
        let credentials = sqlx::query_as::<_, InternCredentials>(&format!(
            "SELECT {INTERN_COLUMNS}, password_hash FROM interns WHERE student_id = $1"
        ))
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credentials)
    }

    #[instrument(skip(self))]
    async fn list_interns(&self) -> Result<Vec<Intern>, StoreError> {
        let interns = sqlx::query_as::<_, Intern>(&format!(
            "SELECT {INTERN_COLUMNS} FROM interns ORDER BY last_name, first_name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(interns)
    }

    #[instrument(skip(self, intern), fields(student_id = %intern.student_id))]
    async fn create_intern(&self, intern: NewIntern) -> Result<Intern, StoreError> {
        sqlx::query_as::<_, Intern>(&format!(
            r#"
            INSERT INTO interns (student_id, first_name, last_name, email, company, department,
                                 start_date, end_date, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {INTERN_COLUMNS}
            "#
        ))
        .bind(&intern.student_id)
        .bind(&intern.first_name)
        .bind(&intern.last_name)
        .bind(&intern.email)
        .bind(&intern.company)
        .bind(&intern.department)
        .bind(intern.start_date)
        .bind(intern.end_date)
        .bind(&intern.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "An intern with this student ID or email"))
    }

    #[instrument(skip(self, changes))]
    async fn update_intern(
        &self,
        id: Uuid,
        changes: InternChanges,
    ) -> Result<Option<Intern>, StoreError> {
        sqlx::query_as::<_, Intern>(&format!(
            r#"
            UPDATE interns
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                company = COALESCE($5, company),
                department = COALESCE($6, department),
                start_date = COALESCE($7, start_date),
                end_date = COALESCE($8, end_date),
                password_hash = COALESCE($9, password_hash),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {INTERN_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&changes.first_name)
        .bind(&changes.last_name)
        .bind(&changes.email)
        .bind(&changes.company)
        .bind(&changes.department)
        .bind(changes.start_date)
        .bind(changes.end_date)
        .bind(&changes.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "An intern with this email"))
    }

    #[instrument(skip(self))]
    async fn delete_intern(&self, id: Uuid) -> Result<bool, StoreError> {
        // log_entries rows go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM interns WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn list_logs(&self) -> Result<Vec<LogEntry>, StoreError> {
        let logs = sqlx::query_as::<_, LogEntry>(&format!(
            "SELECT {LOG_COLUMNS} FROM log_entries ORDER BY log_date DESC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    #[instrument(skip(self))]
    async fn list_logs_for_intern(&self, intern_id: Uuid) -> Result<Vec<LogEntry>, StoreError> {
        let logs = sqlx::query_as::<_, LogEntry>(&format!(
            "SELECT {LOG_COLUMNS} FROM log_entries WHERE intern_id = $1 \
             ORDER BY log_date DESC, created_at DESC"
        ))
        .bind(intern_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    #[instrument(skip(self, entry), fields(intern_id = %entry.intern_id))]
    async fn create_log(&self, entry: NewLogEntry) -> Result<LogEntry, StoreError> {
        let log = sqlx::query_as::<_, LogEntry>(&format!(
            r#"
            INSERT INTO log_entries (intern_id, log_date, hours, tasks, remarks)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {LOG_COLUMNS}
            "#
        ))
        .bind(entry.intern_id)
        .bind(entry.log_date)
        .bind(entry.hours)
        .bind(&entry.tasks)
        .bind(&entry.remarks)
        .fetch_one(&self.pool)
        .await?;

        Ok(log)
    }
}
