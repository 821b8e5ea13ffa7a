use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One day's work record for an intern.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LogEntry {
    pub id: Uuid,
    pub intern_id: Uuid,
    pub log_date: NaiveDate,
    pub hours: f64,
    pub tasks: String,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateLogEntryDto {
    pub log_date: NaiveDate,
    #[validate(range(min = 0.0, max = 24.0, message = "hours must be between 0 and 24"))]
    pub hours: f64,
    #[validate(length(min = 1, max = 2000, message = "tasks is required"))]
    pub tasks: String,
    #[validate(length(max = 1000))]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub intern_id: Uuid,
    pub log_date: NaiveDate,
    pub hours: f64,
    pub tasks: String,
    pub remarks: Option<String>,
}

impl NewLogEntry {
    pub fn from_dto(intern_id: Uuid, dto: CreateLogEntryDto) -> Self {
        Self {
            intern_id,
            log_date: dto.log_date,
            hours: dto.hours,
            tasks: dto.tasks,
            remarks: dto.remarks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(hours: f64, tasks: &str) -> CreateLogEntryDto {
        CreateLogEntryDto {
            log_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            hours,
            tasks: tasks.to_string(),
            remarks: None,
        }
    }

    #[test]
    fn test_hours_range() {
        assert!(dto(8.0, "Wrote tests").validate().is_ok());
        assert!(dto(0.0, "Orientation").validate().is_ok());
        assert!(dto(24.5, "Too much").validate().is_err());
        assert!(dto(-1.0, "Negative").validate().is_err());
    }

    #[test]
    fn test_tasks_required() {
        let errors = dto(4.0, "").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("tasks"));
    }

    #[test]
    fn test_deserialize_date() {
        let json = r#"{"log_date":"2025-03-14","hours":7.5,"tasks":"Fixed bugs"}"#;
        let parsed: CreateLogEntryDto = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.log_date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert!(parsed.remarks.is_none());
    }
}
