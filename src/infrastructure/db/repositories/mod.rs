pub mod course_repository_sqlx;
pub mod enrollment_repository_sqlx;
pub mod exam_repository_sqlx;
pub mod grade_repository_sqlx;
pub mod instructor_repository_sqlx;
pub mod role_repository_sqlx;
pub mod student_repository_sqlx;
pub mod user_repository_sqlx;
