use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::course_repository::{CourseRepository, CourseRow};
use crate::application::ports::enrollment_repository::EnrollmentRepository;

pub struct GetCourse<'a, C, E>
where
    C: CourseRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    pub courses: &'a C,
    pub enrollments: &'a E,
}

impl<'a, C, E> GetCourse<'a, C, E>
where
    C: CourseRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    /// Returns the course plus the ids of enrolled students.
    pub async fn execute(&self, id: i64) -> ApiResult<(CourseRow, Vec<i64>)> {
        let course = self
            .courses
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Course not found with id: {id}")))?;
        let students = self.enrollments.students_for_course(id).await?;
        Ok((course, students))
    }
}
