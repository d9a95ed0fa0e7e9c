//! In-memory implementations of the repository ports for use-case tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::course_repository::{CourseRepository, CourseRow};
use crate::application::ports::enrollment_repository::EnrollmentRepository;
use crate::application::ports::exam_repository::{ExamRepository, ExamRow};
use crate::application::ports::grade_repository::{GradeInsert, GradeRepository, GradeRow};
use crate::application::ports::instructor_repository::{InstructorRepository, InstructorRow};
use crate::application::ports::role_repository::{RoleRepository, RoleRow};
use crate::application::ports::student_repository::{StudentRepository, StudentRow};
use crate::application::ports::user_repository::{UserRepository, UserRow};

fn next_id(counter: &AtomicI64) -> i64 {
    counter.fetch_add(1, Ordering::SeqCst) + 1
}

#[derive(Default)]
pub struct MemUsers {
    users: Mutex<Vec<UserRow>>,
    counter: AtomicI64,
}

impl MemUsers {
    pub fn stored_hash(&self, email: &str) -> Option<String> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .and_then(|u| u.password_hash.clone())
    }
}

#[async_trait]
impl UserRepository for MemUsers {
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        role: &RoleRow,
    ) -> anyhow::Result<UserRow> {
        let row = UserRow {
            id: next_id(&self.counter),
            email: email.to_string(),
            password_hash: Some(password_hash.to_string()),
            roles: vec![role.name.clone()],
        };
        self.users.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<UserRow>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> anyhow::Result<bool> {
        Ok(self.users.lock().unwrap().iter().any(|u| u.email == email))
    }
}

pub struct MemRoles {
    roles: Vec<RoleRow>,
}

impl MemRoles {
    pub fn standard() -> Self {
        Self {
            roles: ["ADMIN", "INSTRUCTOR", "STUDENT"]
                .iter()
                .enumerate()
                .map(|(i, name)| RoleRow {
                    id: i as i64 + 1,
                    name: name.to_string(),
                })
                .collect(),
        }
    }
}

#[async_trait]
impl RoleRepository for MemRoles {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<RoleRow>> {
        Ok(self.roles.iter().find(|r| r.name == name).cloned())
    }
}

#[derive(Default)]
pub struct MemStudents {
    students: Mutex<Vec<StudentRow>>,
    counter: AtomicI64,
}

impl MemStudents {
    pub fn with_ids(ids: &[i64]) -> Self {
        let mem = Self::default();
        {
            let mut guard = mem.students.lock().unwrap();
            for id in ids {
                guard.push(StudentRow {
                    id: *id,
                    name: format!("Student {id}"),
                    email: format!("student{id}@example.com"),
                    password_hash: Some("hash".into()),
                });
            }
        }
        mem.counter
            .store(ids.iter().copied().max().unwrap_or(0), Ordering::SeqCst);
        mem
    }
}

#[async_trait]
impl StudentRepository for MemStudents {
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> anyhow::Result<StudentRow> {
        let row = StudentRow {
            id: next_id(&self.counter),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: Some(password_hash.to_string()),
        };
        self.students.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<StudentRow>> {
        Ok(self
            .students
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<StudentRow>> {
        Ok(self.students.lock().unwrap().clone())
    }

    async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> anyhow::Result<Option<StudentRow>> {
        let mut guard = self.students.lock().unwrap();
        let Some(row) = guard.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        if let Some(name) = name {
            row.name = name.to_string();
        }
        if let Some(email) = email {
            row.email = email.to_string();
        }
        if let Some(hash) = password_hash {
            row.password_hash = Some(hash.to_string());
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let mut guard = self.students.lock().unwrap();
        let before = guard.len();
        guard.retain(|s| s.id != id);
        Ok(guard.len() < before)
    }
}

#[derive(Default)]
pub struct MemInstructors {
    instructors: Mutex<Vec<InstructorRow>>,
    counter: AtomicI64,
}

impl MemInstructors {
    pub fn with_ids(ids: &[i64]) -> Self {
        let mem = Self::default();
        {
            let mut guard = mem.instructors.lock().unwrap();
            for id in ids {
                guard.push(InstructorRow {
                    id: *id,
                    name: format!("Instructor {id}"),
                    email: format!("instructor{id}@example.com"),
                    password_hash: Some("hash".into()),
                });
            }
        }
        mem.counter
            .store(ids.iter().copied().max().unwrap_or(0), Ordering::SeqCst);
        mem
    }
}

#[async_trait]
impl InstructorRepository for MemInstructors {
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> anyhow::Result<InstructorRow> {
        let row = InstructorRow {
            id: next_id(&self.counter),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: Some(password_hash.to_string()),
        };
        self.instructors.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<InstructorRow>> {
        Ok(self
            .instructors
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<InstructorRow>> {
        Ok(self.instructors.lock().unwrap().clone())
    }

    async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> anyhow::Result<Option<InstructorRow>> {
        let mut guard = self.instructors.lock().unwrap();
        let Some(row) = guard.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        if let Some(name) = name {
            row.name = name.to_string();
        }
        if let Some(email) = email {
            row.email = email.to_string();
        }
        if let Some(hash) = password_hash {
            row.password_hash = Some(hash.to_string());
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let mut guard = self.instructors.lock().unwrap();
        let before = guard.len();
        guard.retain(|i| i.id != id);
        Ok(guard.len() < before)
    }
}

#[derive(Default)]
pub struct MemCourses {
    courses: Mutex<Vec<CourseRow>>,
    counter: AtomicI64,
}

impl MemCourses {
    /// (course_id, instructor_id) pairs.
    pub fn with(pairs: &[(i64, i64)]) -> Self {
        let mem = Self::default();
        {
            let mut guard = mem.courses.lock().unwrap();
            for (id, instructor_id) in pairs {
                guard.push(CourseRow {
                    id: *id,
                    title: format!("Course {id}"),
                    description: "description".into(),
                    instructor_id: *instructor_id,
                });
            }
        }
        mem.counter.store(
            pairs.iter().map(|(id, _)| *id).max().unwrap_or(0),
            Ordering::SeqCst,
        );
        mem
    }
}

#[async_trait]
impl CourseRepository for MemCourses {
    async fn create(
        &self,
        title: &str,
        description: &str,
        instructor_id: i64,
    ) -> anyhow::Result<CourseRow> {
        let row = CourseRow {
            id: next_id(&self.counter),
            title: title.to_string(),
            description: description.to_string(),
            instructor_id,
        };
        self.courses.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<CourseRow>> {
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list(&self) -> anyhow::Result<Vec<CourseRow>> {
        Ok(self.courses.lock().unwrap().clone())
    }

    async fn update(
        &self,
        id: i64,
        title: Option<&str>,
        description: Option<&str>,
        instructor_id: Option<i64>,
    ) -> anyhow::Result<Option<CourseRow>> {
        let mut guard = self.courses.lock().unwrap();
        let Some(row) = guard.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if let Some(title) = title {
            row.title = title.to_string();
        }
        if let Some(description) = description {
            row.description = description.to_string();
        }
        if let Some(instructor_id) = instructor_id {
            row.instructor_id = instructor_id;
        }
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let mut guard = self.courses.lock().unwrap();
        let before = guard.len();
        guard.retain(|c| c.id != id);
        Ok(guard.len() < before)
    }
}

#[derive(Default)]
pub struct MemEnrollments {
    links: Arc<Mutex<HashSet<(i64, i64)>>>,
}

impl MemEnrollments {
    /// Shared handle so MemGrades can run its enrollment check against the
    /// same link set, mirroring the SQL adapter's transaction.
    pub fn links(&self) -> Arc<Mutex<HashSet<(i64, i64)>>> {
        self.links.clone()
    }
}

#[async_trait]
impl EnrollmentRepository for MemEnrollments {
    async fn add(&self, student_id: i64, course_id: i64) -> anyhow::Result<bool> {
        Ok(self.links.lock().unwrap().insert((student_id, course_id)))
    }

    async fn remove(&self, student_id: i64, course_id: i64) -> anyhow::Result<bool> {
        Ok(self.links.lock().unwrap().remove(&(student_id, course_id)))
    }

    async fn exists(&self, student_id: i64, course_id: i64) -> anyhow::Result<bool> {
        Ok(self.links.lock().unwrap().contains(&(student_id, course_id)))
    }

    async fn courses_for_student(&self, student_id: i64) -> anyhow::Result<Vec<i64>> {
        let mut out: Vec<i64> = self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == student_id)
            .map(|(_, c)| *c)
            .collect();
        out.sort_unstable();
        Ok(out)
    }

    async fn students_for_course(&self, course_id: i64) -> anyhow::Result<Vec<i64>> {
        let mut out: Vec<i64> = self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, c)| *c == course_id)
            .map(|(s, _)| *s)
            .collect();
        out.sort_unstable();
        Ok(out)
    }
}

#[derive(Default)]
pub struct MemExams {
    exams: Mutex<Vec<ExamRow>>,
    links: Mutex<HashSet<(i64, i64)>>,
    counter: AtomicI64,
}

impl MemExams {
    /// (exam_id, instructor_id, course_id) triples.
    pub fn with(rows: &[(i64, i64, i64)]) -> Self {
        let mem = Self::default();
        {
            let mut guard = mem.exams.lock().unwrap();
            for (id, instructor_id, course_id) in rows {
                guard.push(ExamRow {
                    id: *id,
                    name: format!("Exam {id}"),
                    instructor_id: *instructor_id,
                    course_id: *course_id,
                });
            }
        }
        mem.counter.store(
            rows.iter().map(|(id, _, _)| *id).max().unwrap_or(0),
            Ordering::SeqCst,
        );
        mem
    }
}

#[async_trait]
impl ExamRepository for MemExams {
    async fn create(
        &self,
        name: &str,
        instructor_id: i64,
        course_id: i64,
    ) -> anyhow::Result<ExamRow> {
        let row = ExamRow {
            id: next_id(&self.counter),
            name: name.to_string(),
            instructor_id,
            course_id,
        };
        self.exams.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<ExamRow>> {
        Ok(self
            .exams
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn list_by_instructor(&self, instructor_id: i64) -> anyhow::Result<Vec<ExamRow>> {
        Ok(self
            .exams
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.instructor_id == instructor_id)
            .cloned()
            .collect())
    }

    async fn list_by_student(&self, student_id: i64) -> anyhow::Result<Vec<ExamRow>> {
        let links = self.links.lock().unwrap();
        Ok(self
            .exams
            .lock()
            .unwrap()
            .iter()
            .filter(|e| links.contains(&(e.id, student_id)))
            .cloned()
            .collect())
    }

    async fn assign_students(&self, exam_id: i64, student_ids: &[i64]) -> anyhow::Result<u64> {
        let mut links = self.links.lock().unwrap();
        let mut added = 0;
        for sid in student_ids {
            if links.insert((exam_id, *sid)) {
                added += 1;
            }
        }
        Ok(added)
    }

    async fn students_for_exam(&self, exam_id: i64) -> anyhow::Result<Vec<i64>> {
        let mut out: Vec<i64> = self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|(e, _)| *e == exam_id)
            .map(|(_, s)| *s)
            .collect();
        out.sort_unstable();
        Ok(out)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let mut guard = self.exams.lock().unwrap();
        let before = guard.len();
        guard.retain(|e| e.id != id);
        self.links.lock().unwrap().retain(|(e, _)| *e != id);
        Ok(guard.len() < before)
    }
}

pub struct MemGrades {
    enrollments: Arc<Mutex<HashSet<(i64, i64)>>>,
    grades: Mutex<Vec<GradeRow>>,
    counter: AtomicI64,
}

impl MemGrades {
    pub fn sharing(enrollments: Arc<Mutex<HashSet<(i64, i64)>>>) -> Self {
        Self {
            enrollments,
            grades: Mutex::new(Vec::new()),
            counter: AtomicI64::new(0),
        }
    }
}

#[async_trait]
impl GradeRepository for MemGrades {
    async fn insert(
        &self,
        student_id: i64,
        course_id: i64,
        exam_id: i64,
        grade: &str,
    ) -> anyhow::Result<GradeInsert> {
        if !self
            .enrollments
            .lock()
            .unwrap()
            .contains(&(student_id, course_id))
        {
            return Ok(GradeInsert::NotEnrolled);
        }
        let mut grades = self.grades.lock().unwrap();
        if grades
            .iter()
            .any(|g| g.student_id == student_id && g.course_id == course_id)
        {
            return Ok(GradeInsert::AlreadyGraded);
        }
        let row = GradeRow {
            id: next_id(&self.counter),
            grade: grade.to_string(),
            student_id,
            course_id,
            exam_id,
        };
        grades.push(row.clone());
        Ok(GradeInsert::Created(row))
    }

    async fn list_by_student(&self, student_id: i64) -> anyhow::Result<Vec<GradeRow>> {
        Ok(self
            .grades
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn list_by_course(&self, course_id: i64) -> anyhow::Result<Vec<GradeRow>> {
        Ok(self
            .grades
            .lock()
            .unwrap()
            .iter()
            .filter(|g| g.course_id == course_id)
            .cloned()
            .collect())
    }
}
