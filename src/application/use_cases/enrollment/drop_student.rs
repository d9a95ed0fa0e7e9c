use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::course_repository::CourseRepository;
use crate::application::ports::enrollment_repository::EnrollmentRepository;
use crate::application::ports::student_repository::StudentRepository;

pub struct DropStudent<'a, S, C, E>
where
    S: StudentRepository + ?Sized,
    C: CourseRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    pub students: &'a S,
    pub courses: &'a C,
    pub enrollments: &'a E,
}

impl<'a, S, C, E> DropStudent<'a, S, C, E>
where
    S: StudentRepository + ?Sized,
    C: CourseRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    /// Returns false when the student is not enrolled (state unchanged).
    pub async fn execute(&self, student_id: i64, course_id: i64) -> ApiResult<bool> {
        tracing::info!(student_id, course_id, "unenrolling student");
        let student = self.students.find_by_id(student_id).await?;
        let course = self.courses.find_by_id(course_id).await?;
        if student.is_none() || course.is_none() {
            tracing::warn!(student_id, course_id, "unenrollment failed, entity missing");
            return Err(ApiError::NotFound("Student or Course not found.".into()));
        }
        let removed = self.enrollments.remove(student_id, course_id).await?;
        if !removed {
            tracing::info!(student_id, course_id, "student was not enrolled");
        }
        Ok(removed)
    }
}
