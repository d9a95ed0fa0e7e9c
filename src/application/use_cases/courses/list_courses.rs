use crate::application::ports::course_repository::{CourseRepository, CourseRow};

pub struct ListCourses<'a, C: CourseRepository + ?Sized> {
    pub courses: &'a C,
}

impl<'a, C: CourseRepository + ?Sized> ListCourses<'a, C> {
    pub async fn execute(&self) -> anyhow::Result<Vec<CourseRow>> {
        self.courses.list().await
    }
}
