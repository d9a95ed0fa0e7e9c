pub mod delete_instructor;
pub mod get_instructor;
pub mod list_instructors;
pub mod register_instructor;
pub mod update_instructor;
