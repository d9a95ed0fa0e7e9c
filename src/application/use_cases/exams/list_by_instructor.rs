use crate::application::ports::exam_repository::{ExamRepository, ExamRow};

pub struct ListExamsByInstructor<'a, X: ExamRepository + ?Sized> {
    pub exams: &'a X,
}

impl<'a, X: ExamRepository + ?Sized> ListExamsByInstructor<'a, X> {
    pub async fn execute(&self, instructor_id: i64) -> anyhow::Result<Vec<ExamRow>> {
        self.exams.list_by_instructor(instructor_id).await
    }
}
