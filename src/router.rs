use axum::{Json, Router, middleware, routing::get};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::cors::cors_middleware;
use crate::modules::auth::{init_admin_auth_router, init_student_auth_router};
use crate::modules::interns::{init_admin_logs_router, init_interns_router};
use crate::modules::students::init_student_router;
use crate::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the application router.
///
/// Admin routes live under `/api/admin` and accept a bearer token or the
/// auth cookie; student routes live under `/api/student` and accept a
/// bearer token only. CORS runs outside routing so preflights are answered
/// before any guard sees them.
pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/health", get(health))
        .nest(
            "/api",
            Router::new()
                .nest(
                    "/admin",
                    init_admin_auth_router()
                        .nest("/interns", init_interns_router())
                        .nest("/logs", init_admin_logs_router()),
                )
                .nest(
                    "/student",
                    init_student_auth_router().merge(init_student_router()),
                ),
        )
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(
            state.cors_config.clone(),
            cors_middleware,
        ))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
