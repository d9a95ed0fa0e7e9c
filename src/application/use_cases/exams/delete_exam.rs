use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::exam_repository::ExamRepository;

pub struct DeleteExam<'a, X: ExamRepository + ?Sized> {
    pub exams: &'a X,
}

impl<'a, X: ExamRepository + ?Sized> DeleteExam<'a, X> {
    pub async fn execute(&self, id: i64) -> ApiResult<()> {
        if !self.exams.delete(id).await? {
            return Err(ApiError::NotFound(format!("Exam not found with ID: {id}")));
        }
        tracing::info!(exam_id = id, "exam deleted");
        Ok(())
    }
}
