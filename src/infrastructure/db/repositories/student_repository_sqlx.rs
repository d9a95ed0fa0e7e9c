use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::student_repository::{StudentRepository, StudentRow};
use crate::infrastructure::db::PgPool;

pub struct SqlxStudentRepository {
    pub pool: PgPool,
}

impl SqlxStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(r: &sqlx::postgres::PgRow) -> StudentRow {
    StudentRow {
        id: r.get("id"),
        name: r.get("name"),
        email: r.get("email"),
        password_hash: r.try_get("password_hash").ok(),
    }
}

#[async_trait]
impl StudentRepository for SqlxStudentRepository {
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> anyhow::Result<StudentRow> {
        let row = sqlx::query(
            r#"INSERT INTO students (name, email, password_hash) VALUES ($1, $2, $3)
               RETURNING id, name, email, password_hash"#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_row(&row))
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<StudentRow>> {
        let row = sqlx::query("SELECT id, name, email FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| map_row(&r)))
    }

    async fn list(&self) -> anyhow::Result<Vec<StudentRow>> {
        let rows = sqlx::query("SELECT id, name, email FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(map_row).collect())
    }

    async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        password_hash: Option<&str>,
    ) -> anyhow::Result<Option<StudentRow>> {
        let row = sqlx::query(
            r#"UPDATE students
               SET name = COALESCE($2, name),
                   email = COALESCE($3, email),
                   password_hash = COALESCE($4, password_hash)
               WHERE id = $1
               RETURNING id, name, email, password_hash"#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| map_row(&r)))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
