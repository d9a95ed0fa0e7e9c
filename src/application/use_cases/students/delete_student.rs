use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::student_repository::StudentRepository;

pub struct DeleteStudent<'a, S: StudentRepository + ?Sized> {
    pub students: &'a S,
}

impl<'a, S: StudentRepository + ?Sized> DeleteStudent<'a, S> {
    pub async fn execute(&self, id: i64) -> ApiResult<()> {
        if !self.students.delete(id).await? {
            return Err(ApiError::NotFound(format!("Student not found with ID: {id}")));
        }
        tracing::info!(student_id = id, "student deleted");
        Ok(())
    }
}
