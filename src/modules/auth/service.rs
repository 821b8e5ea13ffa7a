use anyhow::anyhow;
use tracing::instrument;

use interntrack_auth::{AdminPrincipal, StudentPrincipal, create_token};
use interntrack_config::JwtConfig;
use interntrack_core::{AppError, verify_dummy_password, verify_password};
use interntrack_db::{InternRepository, StoreError};
use interntrack_models::{
    AdminAccount, AdminLoginRequest, AdminLoginResponse, StudentLoginRequest,
    StudentLoginResponse,
};
use uuid::Uuid;

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid credentials".to_string())
}

pub struct AuthService;

impl AuthService {
    #[instrument(skip(repository, dto, jwt_config), fields(username = %dto.username))]
    pub async fn login_admin(
        repository: &dyn InternRepository,
        dto: AdminLoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AdminLoginResponse, AppError> {
        let Some(credentials) = repository
            .find_admin_credentials(&dto.username)
            .await
            .map_err(StoreError::into_app_error)?
        else {
            verify_dummy_password(&dto.password);
            tracing::warn!("Admin login failed: unknown username");
            return Err(invalid_credentials());
        };

        if !verify_password(&dto.password, &credentials.password_hash)? {
            tracing::warn!("Admin login failed: wrong password");
            return Err(invalid_credentials());
        }

        let principal = AdminPrincipal {
            user_id: credentials.account.id,
            username: credentials.account.username.clone(),
        };
        let token = create_token(&principal, jwt_config)?;

        tracing::info!(user_id = %principal.user_id, "Admin logged in");

        Ok(AdminLoginResponse {
            token,
            user: credentials.account,
        })
    }

    #[instrument(skip(repository, dto, jwt_config), fields(student_id = %dto.student_id))]
    pub async fn login_student(
        repository: &dyn InternRepository,
        dto: StudentLoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<StudentLoginResponse, AppError> {
        let Some(credentials) = repository
            .find_intern_credentials(&dto.student_id)
            .await
            .map_err(StoreError::into_app_error)?
        else {
            verify_dummy_password(&dto.password);
            tracing::warn!("Student login failed: unknown student ID");
            return Err(invalid_credentials());
        };

        if !verify_password(&dto.password, &credentials.password_hash)? {
            tracing::warn!("Student login failed: wrong password");
            return Err(invalid_credentials());
        }

        let principal = StudentPrincipal {
            intern_id: credentials.intern.id,
            student_id: credentials.intern.student_id.clone(),
        };
        let token = create_token(&principal, jwt_config)?;

        tracing::info!(intern_id = %principal.intern_id, "Student logged in");

        Ok(StudentLoginResponse {
            token,
            intern: credentials.intern,
        })
    }

    #[instrument(skip(repository))]
    pub async fn get_admin_profile(
        repository: &dyn InternRepository,
        user_id: Uuid,
    ) -> Result<AdminAccount, AppError> {
        repository
            .find_admin_by_id(user_id)
            .await
            .map_err(StoreError::into_app_error)?
            .ok_or_else(|| AppError::not_found(anyhow!("Admin not found")))
    }
}
