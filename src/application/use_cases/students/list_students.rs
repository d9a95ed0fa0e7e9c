use crate::application::ports::student_repository::{StudentRepository, StudentRow};

pub struct ListStudents<'a, S: StudentRepository + ?Sized> {
    pub students: &'a S,
}

impl<'a, S: StudentRepository + ?Sized> ListStudents<'a, S> {
    pub async fn execute(&self) -> anyhow::Result<Vec<StudentRow>> {
        self.students.list().await
    }
}
