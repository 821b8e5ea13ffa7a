use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{admin_login, admin_logout, admin_me, student_login};
use crate::state::AppState;

pub fn init_admin_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin_login))
        .route("/logout", post(admin_logout))
        .route("/me", get(admin_me))
}

pub fn init_student_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(student_login))
}
