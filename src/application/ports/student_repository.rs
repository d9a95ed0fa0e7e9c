use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct StudentRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
}

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> anyhow::Result<StudentRow>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<StudentRow>>;
    async fn list(&self) -> anyhow::Result<Vec<StudentRow>>;
    /// Partial overwrite; absent fields keep their stored value.
    async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> anyhow::Result<Option<StudentRow>>;
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}
