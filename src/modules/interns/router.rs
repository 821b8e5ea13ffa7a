use axum::{Router, routing::get};

use super::controller::{
    create_intern, delete_intern, get_intern, get_intern_logs, list_all_logs, list_interns,
    update_intern,
};
use crate::state::AppState;

pub fn init_interns_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_interns).post(create_intern))
        .route(
            "/{id}",
            get(get_intern).put(update_intern).delete(delete_intern),
        )
        .route("/{id}/logs", get(get_intern_logs))
}

pub fn init_admin_logs_router() -> Router<AppState> {
    Router::new().route("/", get(list_all_logs))
}
