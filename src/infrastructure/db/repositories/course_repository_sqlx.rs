use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::course_repository::{CourseRepository, CourseRow};
use crate::infrastructure::db::PgPool;

pub struct SqlxCourseRepository {
    pub pool: PgPool,
}

impl SqlxCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(r: &sqlx::postgres::PgRow) -> CourseRow {
    CourseRow {
        id: r.get("id"),
        title: r.get("title"),
        description: r.get("description"),
        instructor_id: r.get("instructor_id"),
    }
}

#[async_trait]
impl CourseRepository for SqlxCourseRepository {
    async fn create(
        &self,
        title: &str,
        description: &str,
        instructor_id: i64,
    ) -> anyhow::Result<CourseRow> {
        let row = sqlx::query(
            r#"INSERT INTO courses (title, description, instructor_id) VALUES ($1, $2, $3)
               RETURNING id, title, description, instructor_id"#,
        )
        .bind(title)
        .bind(description)
        .bind(instructor_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_row(&row))
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<CourseRow>> {
        let row =
            sqlx::query("SELECT id, title, description, instructor_id FROM courses WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|r| map_row(&r)))
    }

    async fn list(&self) -> anyhow::Result<Vec<CourseRow>> {
        let rows =
            sqlx::query("SELECT id, title, description, instructor_id FROM courses ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.iter().map(map_row).collect())
    }

    async fn update(
        &self,
        id: i64,
        title: Option<&str>,
        description: Option<&str>,
        instructor_id: Option<i64>,
    ) -> anyhow::Result<Option<CourseRow>> {
        let row = sqlx::query(
            r#"UPDATE courses
               SET title = COALESCE($2, title),
                   description = COALESCE($3, description),
                   instructor_id = COALESCE($4, instructor_id)
               WHERE id = $1
               RETURNING id, title, description, instructor_id"#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(instructor_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| map_row(&r)))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
