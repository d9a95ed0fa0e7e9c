use crate::application::ports::grade_repository::{GradeRepository, GradeRow};

pub struct ListGradesByStudent<'a, G: GradeRepository + ?Sized> {
    pub grades: &'a G,
}

impl<'a, G: GradeRepository + ?Sized> ListGradesByStudent<'a, G> {
    pub async fn execute(&self, student_id: i64) -> anyhow::Result<Vec<GradeRow>> {
        self.grades.list_by_student(student_id).await
    }
}
