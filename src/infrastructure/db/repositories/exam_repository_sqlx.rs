use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::exam_repository::{ExamRepository, ExamRow};
use crate::infrastructure::db::PgPool;

pub struct SqlxExamRepository {
    pub pool: PgPool,
}

impl SqlxExamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(r: &sqlx::postgres::PgRow) -> ExamRow {
    ExamRow {
        id: r.get("id"),
        name: r.get("name"),
        instructor_id: r.get("instructor_id"),
        course_id: r.get("course_id"),
    }
}

#[async_trait]
impl ExamRepository for SqlxExamRepository {
    async fn create(
        &self,
        name: &str,
        instructor_id: i64,
        course_id: i64,
    ) -> anyhow::Result<ExamRow> {
        let row = sqlx::query(
            r#"INSERT INTO exams (name, instructor_id, course_id) VALUES ($1, $2, $3)
               RETURNING id, name, instructor_id, course_id"#,
        )
        .bind(name)
        .bind(instructor_id)
        .bind(course_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_row(&row))
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<ExamRow>> {
        let row = sqlx::query("SELECT id, name, instructor_id, course_id FROM exams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| map_row(&r)))
    }

    async fn list_by_instructor(&self, instructor_id: i64) -> anyhow::Result<Vec<ExamRow>> {
        let rows = sqlx::query(
            r#"SELECT id, name, instructor_id, course_id FROM exams
               WHERE instructor_id = $1 ORDER BY id"#,
        )
        .bind(instructor_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_row).collect())
    }

    async fn list_by_student(&self, student_id: i64) -> anyhow::Result<Vec<ExamRow>> {
        let rows = sqlx::query(
            r#"SELECT e.id, e.name, e.instructor_id, e.course_id
               FROM exams e
               JOIN exam_students es ON es.exam_id = e.id
               WHERE es.student_id = $1
               ORDER BY e.id"#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(map_row).collect())
    }

    async fn assign_students(&self, exam_id: i64, student_ids: &[i64]) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"INSERT INTO exam_students (exam_id, student_id)
               SELECT $1, sid FROM UNNEST($2::bigint[]) AS sid
               ON CONFLICT (exam_id, student_id) DO NOTHING"#,
        )
        .bind(exam_id)
        .bind(student_ids)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected())
    }

    async fn students_for_exam(&self, exam_id: i64) -> anyhow::Result<Vec<i64>> {
        let rows = sqlx::query(
            "SELECT student_id FROM exam_students WHERE exam_id = $1 ORDER BY student_id",
        )
        .bind(exam_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(|r| r.get("student_id")).collect())
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM exams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
