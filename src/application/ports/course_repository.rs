use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct CourseRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub instructor_id: i64,
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(
        &self,
        title: &str,
        description: &str,
        instructor_id: i64,
    ) -> anyhow::Result<CourseRow>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<CourseRow>>;
    async fn list(&self) -> anyhow::Result<Vec<CourseRow>>;
    async fn update(
        &self,
        id: i64,
        title: Option<&str>,
        description: Option<&str>,
        instructor_id: Option<i64>,
    ) -> anyhow::Result<Option<CourseRow>>;
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}
