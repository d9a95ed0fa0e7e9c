pub mod delete_student;
pub mod get_student;
pub mod list_students;
pub mod register_student;
pub mod update_student;
