pub mod assign_students;
pub mod create_exam;
pub mod delete_exam;
pub mod list_by_instructor;
pub mod list_by_student;
