use crate::application::ports::grade_repository::{GradeRepository, GradeRow};

pub struct ListGradesByCourse<'a, G: GradeRepository + ?Sized> {
    pub grades: &'a G,
}

impl<'a, G: GradeRepository + ?Sized> ListGradesByCourse<'a, G> {
    pub async fn execute(&self, course_id: i64) -> anyhow::Result<Vec<GradeRow>> {
        self.grades.list_by_course(course_id).await
    }
}
