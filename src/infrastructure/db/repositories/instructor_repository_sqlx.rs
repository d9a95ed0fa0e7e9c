use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::instructor_repository::{InstructorRepository, InstructorRow};
use crate::infrastructure::db::PgPool;

pub struct SqlxInstructorRepository {
    pub pool: PgPool,
}

impl SqlxInstructorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(r: &sqlx::postgres::PgRow) -> InstructorRow {
    InstructorRow {
        id: r.get("id"),
        name: r.get("name"),
        email: r.get("email"),
        password_hash: r.try_get("password_hash").ok(),
    }
}

#[async_trait]
impl InstructorRepository for SqlxInstructorRepository {
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> anyhow::Result<InstructorRow> {
        let row = sqlx::query(
            r#"INSERT INTO instructors (name, email, password_hash) VALUES ($1, $2, $3)
               RETURNING id, name, email, password_hash"#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_row(&row))
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<InstructorRow>> {
        let row = sqlx::query("SELECT id, name, email FROM instructors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| map_row(&r)))
    }

    async fn list(&self) -> anyhow::Result<Vec<InstructorRow>> {
        let rows = sqlx::query("SELECT id, name, email FROM instructors ORDER BY id")
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
    ) -> anyhow::Result<Option<InstructorRow>> {
        let row = sqlx::query(
            r#"UPDATE instructors
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
        let res = sqlx::query("DELETE FROM instructors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
