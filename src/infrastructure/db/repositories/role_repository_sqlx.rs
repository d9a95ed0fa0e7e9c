use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::role_repository::{RoleRepository, RoleRow};
use crate::infrastructure::db::PgPool;

pub struct SqlxRoleRepository {
    pub pool: PgPool,
}

impl SqlxRoleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for SqlxRoleRepository {
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<RoleRow>> {
        let row = sqlx::query("SELECT id, name FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| RoleRow {
            id: r.get("id"),
            name: r.get("name"),
        }))
    }
}
