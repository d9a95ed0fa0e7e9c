use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::instructor_repository::InstructorRepository;

pub struct DeleteInstructor<'a, I: InstructorRepository + ?Sized> {
    pub instructors: &'a I,
}

impl<'a, I: InstructorRepository + ?Sized> DeleteInstructor<'a, I> {
    /// Owned courses go with the instructor (the one modeled cascade).
    pub async fn execute(&self, id: i64) -> ApiResult<()> {
        if !self.instructors.delete(id).await? {
            return Err(ApiError::NotFound(format!(
                "Instructor not found with ID: {id}"
            )));
        }
        tracing::info!(instructor_id = id, "instructor deleted");
        Ok(())
    }
}
