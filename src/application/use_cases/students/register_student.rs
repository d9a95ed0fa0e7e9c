use crate::application::error::ApiResult;
use crate::application::ports::student_repository::{StudentRepository, StudentRow};
use crate::application::use_cases::auth::hash_password;

pub struct RegisterStudent<'a, S: StudentRepository + ?Sized> {
    pub students: &'a S,
}

#[derive(Debug, Clone)]
pub struct RegisterStudentRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl<'a, S: StudentRepository + ?Sized> RegisterStudent<'a, S> {
    pub async fn execute(&self, req: &RegisterStudentRequest) -> ApiResult<StudentRow> {
        let hash = hash_password(&req.password)?;
        let row = self.students.create(&req.name, &req.email, &hash).await?;
        tracing::info!(student_id = row.id, "student registered");
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::testsupport::MemStudents;

    #[tokio::test]
    async fn password_is_hashed_before_persistence() {
        let students = MemStudents::default();
        let uc = RegisterStudent {
            students: &students,
        };
        let row = uc
            .execute(&RegisterStudentRequest {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                password: "secret123".into(),
            })
            .await
            .unwrap();
        let hash = row.password_hash.unwrap();
        assert_ne!(hash, "secret123");
        assert!(hash.starts_with("$argon2"));
    }
}
