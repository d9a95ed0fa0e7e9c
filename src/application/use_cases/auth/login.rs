use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};

use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::user_repository::{UserRepository, UserRow};

pub struct Login<'a, U: UserRepository + ?Sized> {
    pub users: &'a U,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl<'a, U: UserRepository + ?Sized> Login<'a, U> {
    pub async fn execute(&self, req: &LoginRequest) -> ApiResult<UserRow> {
        let row = self
            .users
            .find_by_email(&req.email)
            .await?
            .ok_or(ApiError::Unauthorized)?;
        let hash = row.password_hash.clone().unwrap_or_default();
        let parsed = PasswordHash::new(&hash).map_err(|_| ApiError::Unauthorized)?;
        if Argon2::default()
            .verify_password(req.password.as_bytes(), &parsed)
            .is_err()
        {
            tracing::warn!(email = %req.email, "login failed, invalid credentials");
            return Err(ApiError::Unauthorized);
        }
        Ok(UserRow {
            password_hash: None,
            ..row
        })
    }
}
