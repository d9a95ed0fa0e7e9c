use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::exam_repository::{ExamRepository, ExamRow};

pub struct AssignStudentsToExam<'a, X: ExamRepository + ?Sized> {
    pub exams: &'a X,
}

impl<'a, X: ExamRepository + ?Sized> AssignStudentsToExam<'a, X> {
    /// Links the listed students; already-assigned students are untouched.
    /// Returns the exam together with its full assignment list.
    pub async fn execute(&self, exam_id: i64, student_ids: &[i64]) -> ApiResult<(ExamRow, Vec<i64>)> {
        let exam = self
            .exams
            .find_by_id(exam_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Exam not found with ID: {exam_id}")))?;
        let added = self.exams.assign_students(exam_id, student_ids).await?;
        tracing::info!(exam_id, added, "students assigned to exam");
        let students = self.exams.students_for_exam(exam_id).await?;
        Ok((exam, students))
    }
}
