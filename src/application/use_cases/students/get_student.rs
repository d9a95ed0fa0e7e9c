use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::enrollment_repository::EnrollmentRepository;
use crate::application::ports::student_repository::{StudentRepository, StudentRow};

pub struct GetStudent<'a, S, E>
where
    S: StudentRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    pub students: &'a S,
    pub enrollments: &'a E,
}

impl<'a, S, E> GetStudent<'a, S, E>
where
    S: StudentRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    /// Returns the student plus the ids of enrolled courses.
    pub async fn execute(&self, id: i64) -> ApiResult<(StudentRow, Vec<i64>)> {
        let student = self
            .students
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Student not found with ID: {id}")))?;
        let courses = self.enrollments.courses_for_student(id).await?;
        Ok((student, courses))
    }
}
