use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::instructor_repository::{InstructorRepository, InstructorRow};

pub struct GetInstructor<'a, I: InstructorRepository + ?Sized> {
    pub instructors: &'a I,
}

impl<'a, I: InstructorRepository + ?Sized> GetInstructor<'a, I> {
    pub async fn execute(&self, id: i64) -> ApiResult<InstructorRow> {
        self.instructors
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Instructor not found with ID: {id}")))
    }
}
