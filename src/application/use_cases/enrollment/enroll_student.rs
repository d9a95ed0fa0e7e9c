use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::course_repository::CourseRepository;
use crate::application::ports::enrollment_repository::EnrollmentRepository;
use crate::application::ports::student_repository::StudentRepository;

pub struct EnrollStudent<'a, S, C, E>
where
    S: StudentRepository + ?Sized,
    C: CourseRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    pub students: &'a S,
    pub courses: &'a C,
    pub enrollments: &'a E,
}

impl<'a, S, C, E> EnrollStudent<'a, S, C, E>
where
    S: StudentRepository + ?Sized,
    C: CourseRepository + ?Sized,
    E: EnrollmentRepository + ?Sized,
{
    /// Returns false when the student is already enrolled (state unchanged).
    pub async fn execute(&self, student_id: i64, course_id: i64) -> ApiResult<bool> {
        tracing::info!(student_id, course_id, "enrolling student");
        let student = self.students.find_by_id(student_id).await?;
        let course = self.courses.find_by_id(course_id).await?;
        if student.is_none() || course.is_none() {
            tracing::warn!(student_id, course_id, "enrollment failed, entity missing");
            return Err(ApiError::NotFound("Student or Course not found.".into()));
        }
        let added = self.enrollments.add(student_id, course_id).await?;
        if !added {
            tracing::info!(student_id, course_id, "student already enrolled");
        }
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::enrollment::drop_student::DropStudent;
    use crate::application::use_cases::testsupport::{MemCourses, MemEnrollments, MemStudents};

    struct Fixture {
        students: MemStudents,
        courses: MemCourses,
        enrollments: MemEnrollments,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                students: MemStudents::with_ids(&[1]),
                courses: MemCourses::with(&[(10, 1)]),
                enrollments: MemEnrollments::default(),
            }
        }

        fn enroll(&self) -> EnrollStudent<'_, MemStudents, MemCourses, MemEnrollments> {
            EnrollStudent {
                students: &self.students,
                courses: &self.courses,
                enrollments: &self.enrollments,
            }
        }

        fn drop(&self) -> DropStudent<'_, MemStudents, MemCourses, MemEnrollments> {
            DropStudent {
                students: &self.students,
                courses: &self.courses,
                enrollments: &self.enrollments,
            }
        }
    }

    #[tokio::test]
    async fn enroll_twice_is_a_no_op_second_time() {
        let fx = Fixture::new();
        assert!(fx.enroll().execute(1, 10).await.unwrap());
        assert!(!fx.enroll().execute(1, 10).await.unwrap());
        assert_eq!(fx.enrollments.courses_for_student(1).await.unwrap(), vec![10]);
    }

    #[tokio::test]
    async fn missing_student_or_course_is_not_found() {
        let fx = Fixture::new();
        let err = fx.enroll().execute(99, 10).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        let err = fx.enroll().execute(1, 99).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert!(fx.enrollments.courses_for_student(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn both_lookup_directions_stay_symmetric() {
        let fx = Fixture::new();
        fx.enroll().execute(1, 10).await.unwrap();
        assert_eq!(fx.enrollments.courses_for_student(1).await.unwrap(), vec![10]);
        assert_eq!(fx.enrollments.students_for_course(10).await.unwrap(), vec![1]);
        fx.drop().execute(1, 10).await.unwrap();
        assert!(fx.enrollments.courses_for_student(1).await.unwrap().is_empty());
        assert!(fx.enrollments.students_for_course(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn enroll_unenroll_example_sequence() {
        let fx = Fixture::new();
        assert!(fx.enroll().execute(1, 10).await.unwrap());
        assert!(!fx.enroll().execute(1, 10).await.unwrap());
        assert!(fx.drop().execute(1, 10).await.unwrap());
        assert!(!fx.drop().execute(1, 10).await.unwrap());
    }
}
