//! Request guards and cross-origin handling.
//!
//! - [`auth`]: Admin and student authentication extractors
//! - [`cors`]: Cross-origin headers and preflight responses
//!
//! # Authentication flow
//!
//! 1. The CORS layer answers `OPTIONS` preflights before routing, so they
//!    never reach a guard.
//! 2. `AdminUser` reads `Authorization: Bearer <token>`, falling back to the
//!    `auth-token` cookie; `StudentUser` reads the header only.
//! 3. The token must verify for the guard's principal kind, otherwise the
//!    request is rejected with 401 `{"error": "Authentication required"}`.
//! 4. Student handlers scoped to an intern call
//!    [`StudentUser::require_owner`](auth::StudentUser::require_owner), which
//!    rejects with 403 `{"error": "Access denied"}`.
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AdminUser, StudentUser};
//!
//! async fn list_interns(admin: AdminUser) -> impl IntoResponse { /* ... */ }
//!
//! async fn get_logs(student: StudentUser, Path(intern_id): Path<Uuid>) -> Result<_, AppError> {
//!     student.require_owner(&intern_id)?;
//!     // ...
//! }
//! ```

pub mod auth;
pub mod cors;
