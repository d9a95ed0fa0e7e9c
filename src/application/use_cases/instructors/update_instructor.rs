use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::instructor_repository::{InstructorRepository, InstructorRow};
use crate::application::use_cases::auth::hash_password;

pub struct UpdateInstructor<'a, I: InstructorRepository + ?Sized> {
    pub instructors: &'a I,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateInstructorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl<'a, I: InstructorRepository + ?Sized> UpdateInstructor<'a, I> {
    pub async fn execute(&self, id: i64, req: &UpdateInstructorRequest) -> ApiResult<InstructorRow> {
        let hash = match req.password.as_deref() {
            Some(p) if !p.is_empty() => Some(hash_password(p)?),
            _ => None,
        };
        let row = self
            .instructors
            .update(id, req.name.as_deref(), req.email.as_deref(), hash.as_deref())
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Instructor not found with ID: {id}")))?;
        tracing::info!(instructor_id = row.id, "instructor updated");
        Ok(row)
    }
}
