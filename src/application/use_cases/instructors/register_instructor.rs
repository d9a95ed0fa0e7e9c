use crate::application::error::ApiResult;
use crate::application::ports::instructor_repository::{InstructorRepository, InstructorRow};
use crate::application::use_cases::auth::hash_password;

pub struct RegisterInstructor<'a, I: InstructorRepository + ?Sized> {
    pub instructors: &'a I,
}

#[derive(Debug, Clone)]
pub struct RegisterInstructorRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl<'a, I: InstructorRepository + ?Sized> RegisterInstructor<'a, I> {
    pub async fn execute(&self, req: &RegisterInstructorRequest) -> ApiResult<InstructorRow> {
        let hash = hash_password(&req.password)?;
        let row = self.instructors.create(&req.name, &req.email, &hash).await?;
        tracing::info!(instructor_id = row.id, "instructor registered");
        Ok(row)
    }
}
