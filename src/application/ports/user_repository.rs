use async_trait::async_trait;

use crate::application::ports::role_repository::RoleRow;

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub password_hash: Option<String>,
    pub roles: Vec<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates the user and its role link in one transaction.
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        role: &RoleRow,
    ) -> anyhow::Result<UserRow>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<UserRow>>;
    async fn email_exists(&self, email: &str) -> anyhow::Result<bool>;
}
