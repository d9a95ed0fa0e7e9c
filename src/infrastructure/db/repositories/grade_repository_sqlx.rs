use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::grade_repository::{GradeInsert, GradeRepository, GradeRow};
use crate::infrastructure::db::PgPool;

pub struct SqlxGradeRepository {
    pub pool: PgPool,
}

impl SqlxGradeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(r: &sqlx::postgres::PgRow) -> GradeRow {
    GradeRow {
        id: r.get("id"),
        grade: r.get("grade"),
        student_id: r.get("student_id"),
        course_id: r.get("course_id"),
        exam_id: r.get("exam_id"),
    }
}

#[async_trait]
impl GradeRepository for SqlxGradeRepository {
    async fn insert(
        &self,
        student_id: i64,
        course_id: i64,
        exam_id: i64,
        grade: &str,
    ) -> anyhow::Result<GradeInsert> {
        // Enrollment check and insert commit together; the unique
        // (student_id, course_id) constraint turns a concurrent duplicate
        // into a no-op instead of a second row.
        let mut tx = self.pool.begin().await?;
        let enrolled = sqlx::query(
            r#"SELECT 1 AS one FROM enrollments
               WHERE student_id = $1 AND course_id = $2
               FOR SHARE"#,
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_optional(&mut *tx)
        .await?;
        if enrolled.is_none() {
            tx.rollback().await?;
            return Ok(GradeInsert::NotEnrolled);
        }
        let row = sqlx::query(
            r#"INSERT INTO grades (grade, student_id, course_id, exam_id)
               VALUES ($1, $2, $3, $4)
               ON CONFLICT (student_id, course_id) DO NOTHING
               RETURNING id, grade, student_id, course_id, exam_id"#,
        )
        .bind(grade)
        .bind(student_id)
        .bind(course_id)
        .bind(exam_id)
        .fetch_optional(&mut *tx)
        .await?;
        match row {
            Some(r) => {
                tx.commit().await?;
                Ok(GradeInsert::Created(map_row(&r)))
            }
            None => {
                tx.rollback().await?;
                Ok(GradeInsert::AlreadyGraded)
            }
        }
    }

    async fn list_by_student(&self, student_id: i64) -> anyhow::Result<Vec<GradeRow>> {
        let rows = sqlx::query(
            r#"SELECT id, grade, student_id, course_id, exam_id FROM grades
               WHERE student_id = $1 ORDER BY id"#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_row).collect())
    }

    async fn list_by_course(&self, course_id: i64) -> anyhow::Result<Vec<GradeRow>> {
        let rows = sqlx::query(
            r#"SELECT id, grade, student_id, course_id, exam_id FROM grades
               WHERE course_id = $1 ORDER BY id"#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_row).collect())
    }
}
