use crate::application::error::{ApiError, ApiResult};
use crate::application::ports::student_repository::{StudentRepository, StudentRow};
use crate::application::use_cases::auth::hash_password;

pub struct UpdateStudent<'a, S: StudentRepository + ?Sized> {
    pub students: &'a S,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl<'a, S: StudentRepository + ?Sized> UpdateStudent<'a, S> {
    pub async fn execute(&self, id: i64, req: &UpdateStudentRequest) -> ApiResult<StudentRow> {
        // Empty password means "leave it alone", matching the original API.
        let hash = match req.password.as_deref() {
            Some(p) if !p.is_empty() => Some(hash_password(p)?),
            _ => None,
        };
        let row = self
            .students
            .update(id, req.name.as_deref(), req.email.as_deref(), hash.as_deref())
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Student not found with ID: {id}")))?;
        tracing::info!(student_id = row.id, "student updated");
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::testsupport::MemStudents;

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let students = MemStudents::with_ids(&[1]);
        let uc = UpdateStudent {
            students: &students,
        };
        let row = uc
            .execute(
                1,
                &UpdateStudentRequest {
                    name: Some("Renamed".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(row.name, "Renamed");
        assert_eq!(row.email, "student1@example.com");
        assert_eq!(row.password_hash.as_deref(), Some("hash"));
    }

    #[tokio::test]
    async fn empty_password_is_ignored_and_nonempty_is_rehashed() {
        let students = MemStudents::with_ids(&[1]);
        let uc = UpdateStudent {
            students: &students,
        };
        let row = uc
            .execute(
                1,
                &UpdateStudentRequest {
                    password: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(row.password_hash.as_deref(), Some("hash"));

        let row = uc
            .execute(
                1,
                &UpdateStudentRequest {
                    password: Some("new-secret".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(row.password_hash.unwrap().starts_with("$argon2"));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let students = MemStudents::with_ids(&[1]);
        let uc = UpdateStudent {
            students: &students,
        };
        let err = uc.execute(9, &UpdateStudentRequest::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
