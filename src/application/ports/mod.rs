pub mod course_repository;
pub mod enrollment_repository;
pub mod exam_repository;
pub mod grade_repository;
pub mod instructor_repository;
pub mod role_repository;
pub mod student_repository;
pub mod user_repository;
