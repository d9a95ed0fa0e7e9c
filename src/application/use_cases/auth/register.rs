use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::role_repository::RoleRepository;
use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::application::use_cases::auth::hash_password;

pub struct RegisterUser<'a, U: UserRepository + ?Sized, R: RoleRepository + ?Sized> {
    pub users: &'a U,
    pub roles: &'a R,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: String,
}

impl<'a, U: UserRepository + ?Sized, R: RoleRepository + ?Sized> RegisterUser<'a, U, R> {
    pub async fn execute(&self, req: &RegisterRequest) -> ApiResult<UserRow> {
        if self.users.email_exists(&req.email).await? {
            tracing::warn!(email = %req.email, "registration rejected, email in use");
            return Err(ApiError::InvalidState("Email is already in use!".into()));
        }
        let role = self
            .roles
            .find_by_name(&req.role)
            .await?
            .ok_or_else(|| ApiError::InvalidState(format!("Role not found: {}", req.role)))?;
        let hash = hash_password(&req.password)?;
        let user = self.users.create_user(&req.email, &hash, &role).await?;
        tracing::info!(user_id = user.id, email = %user.email, "user registered");
        Ok(user)
    }
}
