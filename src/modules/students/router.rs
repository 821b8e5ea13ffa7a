use axum::{Router, routing::get};

use super::controller::{create_log, get_intern, get_profile, list_logs};
use crate::state::AppState;

pub fn init_student_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/interns/{intern_id}", get(get_intern))
        .route("/interns/{intern_id}/logs", get(list_logs).post(create_log))
}
