use async_trait::async_trait;

/// Enrollment is one join row per (student, course); both read directions
/// are served from the same table, so the link can never go asymmetric.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Returns false when the pair is already enrolled (no-op).
    async fn add(&self, student_id: i64, course_id: i64) -> anyhow::Result<bool>;
    /// Returns false when the pair is not enrolled (no-op).
    async fn remove(&self, student_id: i64, course_id: i64) -> anyhow::Result<bool>;
    async fn exists(&self, student_id: i64, course_id: i64) -> anyhow::Result<bool>;
    async fn courses_for_student(&self, student_id: i64) -> anyhow::Result<Vec<i64>>;
    async fn students_for_course(&self, course_id: i64) -> anyhow::Result<Vec<i64>>;
}
