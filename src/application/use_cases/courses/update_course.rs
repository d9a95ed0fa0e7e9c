use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::course_repository::{CourseRepository, CourseRow};
use crate::application::ports::instructor_repository::InstructorRepository;

pub struct UpdateCourse<'a, C, I>
where
    C: CourseRepository + ?Sized,
    I: InstructorRepository + ?Sized,
{
    pub courses: &'a C,
    pub instructors: &'a I,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructor_id: Option<i64>,
}

impl<'a, C, I> UpdateCourse<'a, C, I>
where
    C: CourseRepository + ?Sized,
    I: InstructorRepository + ?Sized,
{
    pub async fn execute(&self, id: i64, req: &UpdateCourseRequest) -> ApiResult<CourseRow> {
        if let Some(instructor_id) = req.instructor_id {
            self.instructors
                .find_by_id(instructor_id)
                .await?
                .ok_or_else(|| {
                    ApiError::NotFound(format!("Instructor not found with id: {instructor_id}"))
                })?;
        }
        let row = self
            .courses
            .update(
                id,
                req.title.as_deref(),
                req.description.as_deref(),
                req.instructor_id,
            )
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Course not found with id: {id}")))?;
        tracing::info!(course_id = row.id, "course updated");
        Ok(row)
    }
}
