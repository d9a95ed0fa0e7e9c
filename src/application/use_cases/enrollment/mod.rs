pub mod drop_student;
pub mod enroll_student;
