use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct InstructorRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
}

#[async_trait]
pub trait InstructorRepository: Send + Sync {
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> anyhow::Result<InstructorRow>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<InstructorRow>>;
    async fn list(&self) -> anyhow::Result<Vec<InstructorRow>>;
    async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> anyhow::Result<Option<InstructorRow>>;
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}
