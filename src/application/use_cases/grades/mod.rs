pub mod assign_grade;
pub mod list_by_course;
pub mod list_by_student;
