use crate::application::ports::instructor_repository::{InstructorRepository, InstructorRow};

pub struct ListInstructors<'a, I: InstructorRepository + ?Sized> {
    pub instructors: &'a I,
}

impl<'a, I: InstructorRepository + ?Sized> ListInstructors<'a, I> {
    pub async fn execute(&self) -> anyhow::Result<Vec<InstructorRow>> {
        self.instructors.list().await
    }
}
