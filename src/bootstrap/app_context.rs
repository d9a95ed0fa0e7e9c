use std::sync::Arc;

use crate::application::ports::course_repository::CourseRepository;
use crate::application::ports::enrollment_repository::EnrollmentRepository;
use crate::application::ports::exam_repository::ExamRepository;
use crate::application::ports::grade_repository::GradeRepository;
use crate::application::ports::instructor_repository::InstructorRepository;
use crate::application::ports::role_repository::RoleRepository;
use crate::application::ports::student_repository::StudentRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    role_repo: Arc<dyn RoleRepository>,
    student_repo: Arc<dyn StudentRepository>,
    instructor_repo: Arc<dyn InstructorRepository>,
    course_repo: Arc<dyn CourseRepository>,
    enrollment_repo: Arc<dyn EnrollmentRepository>,
    exam_repo: Arc<dyn ExamRepository>,
    grade_repo: Arc<dyn GradeRepository>,
}

impl AppServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        role_repo: Arc<dyn RoleRepository>,
        student_repo: Arc<dyn StudentRepository>,
        instructor_repo: Arc<dyn InstructorRepository>,
        course_repo: Arc<dyn CourseRepository>,
        enrollment_repo: Arc<dyn EnrollmentRepository>,
        exam_repo: Arc<dyn ExamRepository>,
        grade_repo: Arc<dyn GradeRepository>,
    ) -> Self {
        Self {
            user_repo,
            role_repo,
            student_repo,
            instructor_repo,
            course_repo,
            enrollment_repo,
            exam_repo,
            grade_repo,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn role_repo(&self) -> Arc<dyn RoleRepository> {
        self.services.role_repo.clone()
    }

    pub fn student_repo(&self) -> Arc<dyn StudentRepository> {
        self.services.student_repo.clone()
    }

    pub fn instructor_repo(&self) -> Arc<dyn InstructorRepository> {
        self.services.instructor_repo.clone()
    }

    pub fn course_repo(&self) -> Arc<dyn CourseRepository> {
        self.services.course_repo.clone()
    }

    pub fn enrollment_repo(&self) -> Arc<dyn EnrollmentRepository> {
        self.services.enrollment_repo.clone()
    }

    pub fn exam_repo(&self) -> Arc<dyn ExamRepository> {
        self.services.exam_repo.clone()
    }

    pub fn grade_repo(&self) -> Arc<dyn GradeRepository> {
        self.services.grade_repo.clone()
    }
}
