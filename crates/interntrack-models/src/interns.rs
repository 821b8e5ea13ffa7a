//! Intern records and the DTOs used to manage them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// An intern as exposed to admins and to the intern themself.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Intern {
    pub id: Uuid,
    /// School-issued student number, used as the student login name
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    pub department: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An intern together with its bcrypt hash.
#[derive(Debug, Clone, FromRow)]
pub struct InternCredentials {
    #[sqlx(flatten)]
    pub intern: Intern,
    pub password_hash: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateInternDto {
    #[validate(length(min = 1, max = 50))]
    pub student_id: String,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(max = 200))]
    pub company: Option<String>,
    #[validate(length(max = 200))]
    pub department: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// All fields are optional; only provided fields are changed.
#[derive(Debug, Default, Deserialize, ToSchema, Validate)]
pub struct UpdateInternDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: Option<String>,
    #[validate(length(max = 200))]
    pub company: Option<String>,
    #[validate(length(max = 200))]
    pub department: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Insert payload handed to the repository; the password is already hashed.
#[derive(Debug, Clone)]
pub struct NewIntern {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    pub department: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub password_hash: String,
}

/// Update payload handed to the repository.
#[derive(Debug, Clone, Default)]
pub struct InternChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub department: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub password_hash: Option<String>,
}

impl InternChanges {
    /// Applies the changes to an in-memory copy of `intern`.
    pub fn apply_to(&self, intern: &mut Intern) {
        if let Some(first_name) = &self.first_name {
            intern.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            intern.last_name = last_name.clone();
        }
        if let Some(email) = &self.email {
            intern.email = email.clone();
        }
        if self.company.is_some() {
            intern.company = self.company.clone();
        }
        if self.department.is_some() {
            intern.department = self.department.clone();
        }
        if self.start_date.is_some() {
            intern.start_date = self.start_date;
        }
        if self.end_date.is_some() {
            intern.end_date = self.end_date;
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct StudentLoginRequest {
    #[validate(length(min = 1, max = 50, message = "student_id is required"))]
    pub student_id: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentLoginResponse {
    pub token: String,
    pub intern: Intern,
}
