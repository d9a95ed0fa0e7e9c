pub mod add_course;
pub mod delete_course;
pub mod get_course;
pub mod list_courses;
pub mod update_course;
