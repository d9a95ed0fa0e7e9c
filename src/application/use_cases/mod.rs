pub mod auth;
pub mod courses;
pub mod enrollment;
pub mod exams;
pub mod grades;
pub mod instructors;
pub mod students;

#[cfg(test)]
pub(crate) mod testsupport;
