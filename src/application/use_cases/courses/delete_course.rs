use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::course_repository::CourseRepository;

pub struct DeleteCourse<'a, C: CourseRepository + ?Sized> {
    pub courses: &'a C,
}

impl<'a, C: CourseRepository + ?Sized> DeleteCourse<'a, C> {
    pub async fn execute(&self, id: i64) -> ApiResult<()> {
        if !self.courses.delete(id).await? {
            return Err(ApiError::NotFound(format!("Course not found with id: {id}")));
        }
        tracing::info!(course_id = id, "course deleted");
        Ok(())
    }
}
