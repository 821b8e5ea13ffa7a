//! In-memory [`InternRepository`] used by the test suite.

use async_trait::async_trait;
use chrono::Utc;
use interntrack_models::{
    AdminAccount, AdminCredentials, Intern, InternChanges, InternCredentials, LogEntry, NewIntern,
    NewLogEntry,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::repository::{InternRepository, StoreError};

#[derive(Default)]
struct Collections {
    admins: Vec<AdminCredentials>,
    interns: Vec<InternCredentials>,
    logs: Vec<LogEntry>,
}

#[derive(Default)]
pub struct MemoryInternRepository {
    inner: RwLock<Collections>,
}

impl MemoryInternRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an admin account. Admin accounts are provisioned out of band, so
    /// this lives outside [`InternRepository`].
    pub async fn insert_admin(&self, username: &str, password_hash: String) -> AdminAccount {
        let account = AdminAccount {
            id: Uuid::new_v4(),
            username: username.to_string(),
            created_at: Utc::now(),
        };

        self.inner.write().await.admins.push(AdminCredentials {
            account: account.clone(),
            password_hash,
        });

        account
    }
}

fn sort_newest_first(logs: &mut [LogEntry]) {
    logs.sort_by(|a, b| {
        b.log_date
            .cmp(&a.log_date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[async_trait]
impl InternRepository for MemoryInternRepository {
    async fn find_admin_by_id(&self, id: Uuid) -> Result<Option<AdminAccount>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .admins
            .iter()
            .find(|a| a.account.id == id)
            .map(|a| a.account.clone()))
    }

    async fn find_admin_credentials(
        &self,
        username: &str,
    ) -> Result<Option<AdminCredentials>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .admins
            .iter()
            .find(|a| a.account.username == username)
            .cloned())
    }

    async fn find_intern_by_id(&self, id: Uuid) -> Result<Option<Intern>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .interns
            .iter()
            .find(|c| c.intern.id == id)
            .map(|c| c.intern.clone()))
    }

    async fn find_intern_credentials(
        &self,
        student_id: &str,
    ) -> Result<Option<InternCredentials>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .interns
            .iter()
            .find(|c| c.intern.student_id == student_id)
            .cloned())
    }

    async fn list_interns(&self) -> Result<Vec<Intern>, StoreError> {
        let inner = self.inner.read().await;
        let mut interns: Vec<Intern> = inner.interns.iter().map(|c| c.intern.clone()).collect();
        interns.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then_with(|| a.first_name.cmp(&b.first_name))
        });
        Ok(interns)
    }

    async fn create_intern(&self, intern: NewIntern) -> Result<Intern, StoreError> {
        let mut inner = self.inner.write().await;

        let duplicate = inner.interns.iter().any(|c| {
            c.intern.student_id == intern.student_id || c.intern.email == intern.email
        });
        if duplicate {
            return Err(StoreError::Conflict(
                "An intern with this student ID or email already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let record = Intern {
            id: Uuid::new_v4(),
            student_id: intern.student_id,
            first_name: intern.first_name,
            last_name: intern.last_name,
            email: intern.email,
            company: intern.company,
            department: intern.department,
            start_date: intern.start_date,
            end_date: intern.end_date,
            created_at: now,
            updated_at: now,
        };

        inner.interns.push(InternCredentials {
            intern: record.clone(),
            password_hash: intern.password_hash,
        });

        Ok(record)
    }

    async fn update_intern(
        &self,
        id: Uuid,
        changes: InternChanges,
    ) -> Result<Option<Intern>, StoreError> {
        let mut inner = self.inner.write().await;

        if let Some(email) = &changes.email {
            let taken = inner
                .interns
                .iter()
                .any(|c| c.intern.id != id && &c.intern.email == email);
            if taken {
                return Err(StoreError::Conflict(
                    "An intern with this email already exists".to_string(),
                ));
            }
        }

        let Some(record) = inner.interns.iter_mut().find(|c| c.intern.id == id) else {
            return Ok(None);
        };

        changes.apply_to(&mut record.intern);
        if let Some(password_hash) = changes.password_hash {
            record.password_hash = password_hash;
        }
        record.intern.updated_at = Utc::now();

        Ok(Some(record.intern.clone()))
    }

    async fn delete_intern(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;

        let before = inner.interns.len();
        inner.interns.retain(|c| c.intern.id != id);
        let removed = inner.interns.len() != before;

        if removed {
            inner.logs.retain(|log| log.intern_id != id);
        }

        Ok(removed)
    }

    async fn list_logs(&self) -> Result<Vec<LogEntry>, StoreError> {
        let mut logs = self.inner.read().await.logs.clone();
        sort_newest_first(&mut logs);
        Ok(logs)
    }

    async fn list_logs_for_intern(&self, intern_id: Uuid) -> Result<Vec<LogEntry>, StoreError> {
        let mut logs: Vec<LogEntry> = self
            .inner
            .read()
            .await
            .logs
            .iter()
            .filter(|log| log.intern_id == intern_id)
            .cloned()
            .collect();
        sort_newest_first(&mut logs);
        Ok(logs)
    }

    async fn create_log(&self, entry: NewLogEntry) -> Result<LogEntry, StoreError> {
        let log = LogEntry {
            id: Uuid::new_v4(),
            intern_id: entry.intern_id,
            log_date: entry.log_date,
            hours: entry.hours,
            tasks: entry.tasks,
            remarks: entry.remarks,
            created_at: Utc::now(),
        };

        self.inner.write().await.logs.push(log.clone());

        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_intern(student_id: &str, email: &str, last_name: &str) -> NewIntern {
        NewIntern {
            student_id: student_id.to_string(),
            first_name: "Test".to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            company: None,
            department: None,
            start_date: None,
            end_date: None,
            password_hash: "hash".to_string(),
        }
    }

    fn new_log(intern_id: Uuid, day: u32) -> NewLogEntry {
        NewLogEntry {
            intern_id,
            log_date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            hours: 8.0,
            tasks: format!("Day {day}"),
            remarks: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_intern() {
        let repo = MemoryInternRepository::new();
        let created = repo
            .create_intern(new_intern("S-1", "a@example.com", "Obi"))
            .await
            .unwrap();

        let found = repo.find_intern_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.student_id, "S-1");

        let credentials = repo.find_intern_credentials("S-1").await.unwrap().unwrap();
        assert_eq!(credentials.password_hash, "hash");
        assert!(repo.find_intern_credentials("S-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_student_id_conflicts() {
        let repo = MemoryInternRepository::new();
        repo.create_intern(new_intern("S-1", "a@example.com", "Obi"))
            .await
            .unwrap();

        let result = repo
            .create_intern(new_intern("S-1", "b@example.com", "Eze"))
            .await;
        assert!(matches!(result, Err(StoreError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_list_interns_sorted_by_name() {
        let repo = MemoryInternRepository::new();
        repo.create_intern(new_intern("S-1", "a@example.com", "Zeta"))
            .await
            .unwrap();
        repo.create_intern(new_intern("S-2", "b@example.com", "Alpha"))
            .await
            .unwrap();

        let names: Vec<String> = repo
            .list_interns()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.last_name)
            .collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }

    #[tokio::test]
    async fn test_update_missing_intern_returns_none() {
        let repo = MemoryInternRepository::new();
        let updated = repo
            .update_intern(Uuid::new_v4(), InternChanges::default())
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_update_changes_password_hash() {
        let repo = MemoryInternRepository::new();
        let created = repo
            .create_intern(new_intern("S-1", "a@example.com", "Obi"))
            .await
            .unwrap();

        let changes = InternChanges {
            department: Some("Platform".to_string()),
            password_hash: Some("new-hash".to_string()),
            ..Default::default()
        };
        let updated = repo.update_intern(created.id, changes).await.unwrap().unwrap();
        assert_eq!(updated.department.as_deref(), Some("Platform"));

        let credentials = repo.find_intern_credentials("S-1").await.unwrap().unwrap();
        assert_eq!(credentials.password_hash, "new-hash");
    }

    #[tokio::test]
    async fn test_delete_intern_removes_logs() {
        let repo = MemoryInternRepository::new();
        let keep = repo
            .create_intern(new_intern("S-1", "a@example.com", "Obi"))
            .await
            .unwrap();
        let gone = repo
            .create_intern(new_intern("S-2", "b@example.com", "Eze"))
            .await
            .unwrap();
        repo.create_log(new_log(keep.id, 1)).await.unwrap();
        repo.create_log(new_log(gone.id, 2)).await.unwrap();

        assert!(repo.delete_intern(gone.id).await.unwrap());
        assert!(!repo.delete_intern(gone.id).await.unwrap());

        let logs = repo.list_logs().await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].intern_id, keep.id);
    }

    #[tokio::test]
    async fn test_logs_newest_first() {
        let repo = MemoryInternRepository::new();
        let intern_id = Uuid::new_v4();
        repo.create_log(new_log(intern_id, 3)).await.unwrap();
        repo.create_log(new_log(intern_id, 10)).await.unwrap();
        repo.create_log(new_log(Uuid::new_v4(), 5)).await.unwrap();

        let logs = repo.list_logs_for_intern(intern_id).await.unwrap();
        let days: Vec<String> = logs.iter().map(|l| l.tasks.clone()).collect();
        assert_eq!(days, vec!["Day 10", "Day 3"]);
    }

    #[tokio::test]
    async fn test_admin_lookup() {
        let repo = MemoryInternRepository::new();
        let admin = repo.insert_admin("coordinator", "hash".to_string()).await;

        let by_id = repo.find_admin_by_id(admin.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "coordinator");

        let credentials = repo
            .find_admin_credentials("coordinator")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(credentials.account.id, admin.id);
        assert!(repo.find_admin_credentials("nobody").await.unwrap().is_none());
    }
}
