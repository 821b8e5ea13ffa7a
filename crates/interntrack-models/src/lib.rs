//! # InternTrack Models
//!
//! Records and request/response DTOs for the InternTrack API.
//!
//! - [`admins`]: Dashboard operator accounts and admin login
//! - [`interns`]: Intern records, student login, and intern management DTOs
//! - [`logs`]: Daily log entries submitted by interns
//!
//! Records that carry a password hash are split in two: the public record
//! (`AdminAccount`, `Intern`) is what gets serialized to clients, and the
//! `*Credentials` wrapper adds the hash for login checks only.

pub mod admins;
pub mod interns;
pub mod logs;

pub use admins::{AdminAccount, AdminCredentials, AdminLoginRequest, AdminLoginResponse};
pub use interns::{
    CreateInternDto, Intern, InternChanges, InternCredentials, NewIntern, StudentLoginRequest,
    StudentLoginResponse, UpdateInternDto,
};
pub use logs::{CreateLogEntryDto, LogEntry, NewLogEntry};

use serde::Serialize;
use utoipa::ToSchema;

/// Generic acknowledgement body.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
