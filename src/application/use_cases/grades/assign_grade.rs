use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::course_repository::CourseRepository;
use crate::application::ports::exam_repository::ExamRepository;
use crate::application::ports::grade_repository::{GradeInsert, GradeRepository, GradeRow};
use crate::application::ports::student_repository::StudentRepository;

pub struct AssignGrade<'a, S, C, X, G>
where
    S: StudentRepository + ?Sized,
    C: CourseRepository + ?Sized,
    X: ExamRepository + ?Sized,
    G: GradeRepository + ?Sized,
{
    pub students: &'a S,
    pub courses: &'a C,
    pub exams: &'a X,
    pub grades: &'a G,
}

#[derive(Debug, Clone)]
pub struct AssignGradeRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub exam_id: i64,
    pub grade: String,
}

impl<'a, S, C, X, G> AssignGrade<'a, S, C, X, G>
where
    S: StudentRepository + ?Sized,
    C: CourseRepository + ?Sized,
    X: ExamRepository + ?Sized,
    G: GradeRepository + ?Sized,
{
    pub async fn execute(&self, req: &AssignGradeRequest) -> ApiResult<GradeRow> {
        tracing::info!(
            student_id = req.student_id,
            course_id = req.course_id,
            exam_id = req.exam_id,
            "assigning grade"
        );
        self.students
            .find_by_id(req.student_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Student not found with id: {}", req.student_id))
            })?;
        self.courses.find_by_id(req.course_id).await?.ok_or_else(|| {
            ApiError::NotFound(format!("Course not found with id: {}", req.course_id))
        })?;
        self.exams.find_by_id(req.exam_id).await?.ok_or_else(|| {
            ApiError::NotFound(format!("Exam not found with id: {}", req.exam_id))
        })?;

        // The enrollment re-check and the duplicate check happen inside the
        // repository transaction; the unique (student, course) constraint is
        // the final backstop.
        match self
            .grades
            .insert(req.student_id, req.course_id, req.exam_id, &req.grade)
            .await?
        {
            GradeInsert::Created(row) => {
                tracing::info!(grade_id = row.id, "grade assigned");
                Ok(row)
            }
            GradeInsert::NotEnrolled => {
                tracing::warn!(
                    student_id = req.student_id,
                    course_id = req.course_id,
                    "grade rejected, student not enrolled"
                );
                Err(ApiError::InvalidState(
                    "Student is not enrolled in this course!".into(),
                ))
            }
            GradeInsert::AlreadyGraded => {
                tracing::warn!(
                    student_id = req.student_id,
                    course_id = req.course_id,
                    "grade rejected, already assigned"
                );
                Err(ApiError::InvalidState(
                    "Grade already assigned for this student and course!".into(),
                ))
            }
        }
    }
}
