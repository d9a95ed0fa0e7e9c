use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct GradeRow {
    pub id: i64,
    pub grade: String,
    pub student_id: i64,
    pub course_id: i64,
    pub exam_id: i64,
}

/// Outcome of the guarded insert. The enrollment re-check and the duplicate
/// check run in the same transaction as the insert itself.
#[derive(Debug)]
pub enum GradeInsert {
    Created(GradeRow),
    NotEnrolled,
    AlreadyGraded,
}

#[async_trait]
pub trait GradeRepository: Send + Sync {
    async fn insert(
        &self,
        student_id: i64,
        course_id: i64,
        exam_id: i64,
        grade: &str,
    ) -> anyhow::Result<GradeInsert>;
    async fn list_by_student(&self, student_id: i64) -> anyhow::Result<Vec<GradeRow>>;
    async fn list_by_course(&self, course_id: i64) -> anyhow::Result<Vec<GradeRow>>;
}
