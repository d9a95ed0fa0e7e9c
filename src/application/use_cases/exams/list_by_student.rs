use crate::application::ports::exam_repository::{ExamRepository, ExamRow};

pub struct ListExamsByStudent<'a, X: ExamRepository + ?Sized> {
    pub exams: &'a X,
}

impl<'a, X: ExamRepository + ?Sized> ListExamsByStudent<'a, X> {
    pub async fn execute(&self, student_id: i64) -> anyhow::Result<Vec<ExamRow>> {
        self.exams.list_by_student(student_id).await
    }
}
