use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::course_repository::CourseRepository;
use crate::application::ports::exam_repository::{ExamRepository, ExamRow};
use crate::application::ports::instructor_repository::InstructorRepository;

pub struct CreateExam<'a, X, I, C>
where
    X: ExamRepository + ?Sized,
    I: InstructorRepository + ?Sized,
    C: CourseRepository + ?Sized,
{
    pub exams: &'a X,
    pub instructors: &'a I,
    pub courses: &'a C,
}

#[derive(Debug, Clone)]
pub struct CreateExamRequest {
    pub name: String,
    pub instructor_id: i64,
    pub course_id: i64,
}

impl<'a, X, I, C> CreateExam<'a, X, I, C>
where
    X: ExamRepository + ?Sized,
    I: InstructorRepository + ?Sized,
    C: CourseRepository + ?Sized,
{
    pub async fn execute(&self, req: &CreateExamRequest) -> ApiResult<ExamRow> {
        self.instructors
            .find_by_id(req.instructor_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!(
                    "Instructor not found with ID: {}",
                    req.instructor_id
                ))
            })?;
        self.courses.find_by_id(req.course_id).await?.ok_or_else(|| {
            ApiError::NotFound(format!("Course not found with id: {}", req.course_id))
        })?;
        let row = self
            .exams
            .create(&req.name, req.instructor_id, req.course_id)
            .await?;
        tracing::info!(exam_id = row.id, "exam created");
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::testsupport::{MemCourses, MemExams, MemInstructors};

    #[tokio::test]
    async fn exam_requires_existing_instructor_and_course() {
        let exams = MemExams::default();
        let instructors = MemInstructors::with_ids(&[1]);
        let courses = MemCourses::with(&[(10, 1)]);
        let uc = CreateExam {
            exams: &exams,
            instructors: &instructors,
            courses: &courses,
        };
        let mut req = CreateExamRequest {
            name: "Midterm".into(),
            instructor_id: 9,
            course_id: 10,
        };
        assert!(matches!(
            uc.execute(&req).await.unwrap_err(),
            ApiError::NotFound(_)
        ));
        req.instructor_id = 1;
        req.course_id = 99;
        assert!(matches!(
            uc.execute(&req).await.unwrap_err(),
            ApiError::NotFound(_)
        ));
        req.course_id = 10;
        let row = uc.execute(&req).await.unwrap();
        assert_eq!(row.name, "Midterm");
    }
}
