#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use interntrack::interntrack_auth::{AdminPrincipal, StudentPrincipal, create_token};
use interntrack::interntrack_config::{CorsConfig, CorsMode, JwtConfig};
use interntrack::interntrack_db::{InternRepository, MemoryInternRepository};
use interntrack::interntrack_models::{AdminAccount, Intern, NewIntern};
use interntrack::router::init_router;
use interntrack::state::AppState;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub const DASHBOARD_ORIGIN: &str = "https://dashboard.example.com";
pub const ADMIN_PASSWORD: &str = "admin-pass-123";
pub const STUDENT_PASSWORD: &str = "student-pass-123";

pub struct TestApp {
    pub router: Router,
    pub repository: Arc<MemoryInternRepository>,
    pub jwt_config: JwtConfig,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        admin_token_expiry: 604800,
        student_token_expiry: 2592000,
    }
}

pub fn test_cors_config(mode: CorsMode) -> CorsConfig {
    CorsConfig {
        allowed_origins: vec![DASHBOARD_ORIGIN.to_string()],
        mode,
    }
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with_mode(CorsMode::Production)
}

pub fn setup_test_app_with_mode(mode: CorsMode) -> TestApp {
    let repository = Arc::new(MemoryInternRepository::new());
    let jwt_config = test_jwt_config();
    let shared: Arc<dyn InternRepository> = repository.clone();
    let state = AppState::new(shared, jwt_config.clone(), test_cors_config(mode));

    TestApp {
        router: init_router(state),
        repository,
        jwt_config,
    }
}

/// Low-cost hash so seeding stays fast; verification accepts any cost.
pub fn quick_hash(password: &str) -> String {
    bcrypt::hash(password, 4).unwrap()
}

pub async fn seed_admin(repository: &MemoryInternRepository, username: &str) -> AdminAccount {
    repository
        .insert_admin(username, quick_hash(ADMIN_PASSWORD))
        .await
}

pub async fn seed_intern(
    repository: &MemoryInternRepository,
    student_id: &str,
    email: &str,
) -> Intern {
    repository
        .create_intern(NewIntern {
            student_id: student_id.to_string(),
            first_name: "Ada".to_string(),
            last_name: format!("Intern {student_id}"),
            email: email.to_string(),
            company: Some("Acme".to_string()),
            department: None,
            start_date: None,
            end_date: None,
            password_hash: quick_hash(STUDENT_PASSWORD),
        })
        .await
        .unwrap()
}

pub fn admin_token(app: &TestApp, admin: &AdminAccount) -> String {
    create_token(
        &AdminPrincipal {
            user_id: admin.id,
            username: admin.username.clone(),
        },
        &app.jwt_config,
    )
    .unwrap()
}

pub fn student_token(app: &TestApp, intern: &Intern) -> String {
    student_token_for(app, intern.id, &intern.student_id)
}

pub fn student_token_for(app: &TestApp, intern_id: Uuid, student_id: &str) -> String {
    create_token(
        &StudentPrincipal {
            intern_id,
            student_id: student_id.to_string(),
        },
        &app.jwt_config,
    )
    .unwrap()
}

pub fn get(uri: &str) -> axum::http::request::Builder {
    Request::builder().method("GET").uri(uri)
}

pub fn bearer(builder: axum::http::request::Builder, token: &str) -> axum::http::request::Builder {
    builder.header("authorization", format!("Bearer {token}"))
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = bearer(builder, token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(app: &TestApp, request: Request<Body>) -> TestResponse {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}
