use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::enrollment_repository::EnrollmentRepository;
use crate::infrastructure::db::PgPool;

pub struct SqlxEnrollmentRepository {
    pub pool: PgPool,
}

impl SqlxEnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for SqlxEnrollmentRepository {
    async fn add(&self, student_id: i64, course_id: i64) -> anyhow::Result<bool> {
        // Single-row insert into the join table; the primary key makes the
        // already-enrolled case a no-op.
        let res = sqlx::query(
            r#"INSERT INTO enrollments (student_id, course_id) VALUES ($1, $2)
               ON CONFLICT (student_id, course_id) DO NOTHING"#,
        )
        .bind(student_id)
        .bind(course_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn remove(&self, student_id: i64, course_id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM enrollments WHERE student_id = $1 AND course_id = $2")
            .bind(student_id)
            .bind(course_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn exists(&self, student_id: i64, course_id: i64) -> anyhow::Result<bool> {
        let row = sqlx::query(
            r#"SELECT EXISTS(
                   SELECT 1 FROM enrollments WHERE student_id = $1 AND course_id = $2
               ) AS found"#,
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.get("found"))
    }

    async fn courses_for_student(&self, student_id: i64) -> anyhow::Result<Vec<i64>> {
        let rows = sqlx::query(
            "SELECT course_id FROM enrollments WHERE student_id = $1 ORDER BY course_id",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(|r| r.get("course_id")).collect())
    }

    async fn students_for_course(&self, course_id: i64) -> anyhow::Result<Vec<i64>> {
        let rows = sqlx::query(
            "SELECT student_id FROM enrollments WHERE course_id = $1 ORDER BY student_id",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(|r| r.get("student_id")).collect())
    }
}
