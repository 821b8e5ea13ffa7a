use utoipa::openapi::security::{
    ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme,
};
use utoipa::{Modify, OpenApi};

use interntrack_models::{
    AdminAccount, AdminLoginRequest, AdminLoginResponse, CreateInternDto, CreateLogEntryDto,
    Intern, LogEntry, MessageResponse, StudentLoginRequest, StudentLoginResponse,
    UpdateInternDto,
};

use crate::middleware::auth::AUTH_COOKIE;
use crate::modules::auth::controller::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::admin_login,
        crate::modules::auth::controller::admin_logout,
        crate::modules::auth::controller::admin_me,
        crate::modules::auth::controller::student_login,
        crate::modules::interns::controller::list_interns,
        crate::modules::interns::controller::create_intern,
        crate::modules::interns::controller::get_intern,
        crate::modules::interns::controller::update_intern,
        crate::modules::interns::controller::delete_intern,
        crate::modules::interns::controller::get_intern_logs,
        crate::modules::interns::controller::list_all_logs,
        crate::modules::students::controller::get_profile,
        crate::modules::students::controller::get_intern,
        crate::modules::students::controller::list_logs,
        crate::modules::students::controller::create_log,
    ),
    components(
        schemas(
            AdminAccount,
            AdminLoginRequest,
            AdminLoginResponse,
            StudentLoginRequest,
            StudentLoginResponse,
            Intern,
            CreateInternDto,
            UpdateInternDto,
            LogEntry,
            CreateLogEntryDto,
            MessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Admin Auth", description = "Dashboard login and session"),
        (name = "Interns", description = "Intern management for administrators"),
        (name = "Logs", description = "Log entries across all interns"),
        (name = "Student Auth", description = "Mobile app login"),
        (name = "Student", description = "A student's own profile and log entries")
    ),
    info(
        title = "InternTrack API",
        version = "0.1.0",
        description = "Internship tracking API: an admin dashboard and a student mobile app sharing one backend.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(AUTH_COOKIE))),
            );
        }
    }
}
