use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::course_repository::{CourseRepository, CourseRow};
use crate::application::ports::instructor_repository::InstructorRepository;

pub struct AddCourse<'a, C, I>
where
    C: CourseRepository + ?Sized,
    I: InstructorRepository + ?Sized,
{
    pub courses: &'a C,
    pub instructors: &'a I,
}

#[derive(Debug, Clone)]
pub struct AddCourseRequest {
    pub title: String,
    pub description: String,
}

impl<'a, C, I> AddCourse<'a, C, I>
where
    C: CourseRepository + ?Sized,
    I: InstructorRepository + ?Sized,
{
    pub async fn execute(&self, req: &AddCourseRequest, instructor_id: i64) -> ApiResult<CourseRow> {
        self.instructors
            .find_by_id(instructor_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Instructor not found with id: {instructor_id}"))
            })?;
        let row = self
            .courses
            .create(&req.title, &req.description, instructor_id)
            .await?;
        tracing::info!(course_id = row.id, instructor_id, "course added");
        Ok(row)
    }
}
