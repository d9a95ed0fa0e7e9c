use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct ExamRow {
    pub id: i64,
    pub name: String,
    pub instructor_id: i64,
    pub course_id: i64,
}

#[async_trait]
pub trait ExamRepository: Send + Sync {
    async fn create(
        &self,
        name: &str,
        instructor_id: i64,
        course_id: i64,
    ) -> anyhow::Result<ExamRow>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<ExamRow>>;
    async fn list_by_instructor(&self, instructor_id: i64) -> anyhow::Result<Vec<ExamRow>>;
    async fn list_by_student(&self, student_id: i64) -> anyhow::Result<Vec<ExamRow>>;
    /// Links the listed students to the exam; already-linked pairs are left
    /// untouched. Returns the number of new links.
    async fn assign_students(&self, exam_id: i64, student_ids: &[i64]) -> anyhow::Result<u64>;
    async fn students_for_exam(&self, exam_id: i64) -> anyhow::Result<Vec<i64>>;
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}
