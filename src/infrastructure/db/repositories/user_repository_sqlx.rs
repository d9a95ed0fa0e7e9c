use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::role_repository::RoleRow;
use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::infrastructure::db::PgPool;

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_WITH_ROLES: &str = r#"
    SELECT u.id, u.email, u.password_hash,
           COALESCE(array_agg(r.name) FILTER (WHERE r.name IS NOT NULL), '{}') AS roles
    FROM users u
    LEFT JOIN user_roles ur ON ur.user_id = u.id
    LEFT JOIN roles r ON r.id = ur.role_id
"#;

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        role: &RoleRow,
    ) -> anyhow::Result<UserRow> {
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(
            r#"INSERT INTO users (email, password_hash) VALUES ($1, $2)
               RETURNING id, email, password_hash"#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await?;
        let id: i64 = row.get("id");
        sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)")
            .bind(id)
            .bind(role.id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(UserRow {
            id,
            email: row.get("email"),
            password_hash: row.try_get("password_hash").ok(),
            roles: vec![role.name.clone()],
        })
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserRow>> {
        let sql = format!("{SELECT_WITH_ROLES} WHERE u.email = $1 GROUP BY u.id");
        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| UserRow {
            id: r.get("id"),
            email: r.get("email"),
            password_hash: r.try_get("password_hash").ok(),
            roles: r.get("roles"),
        }))
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<UserRow>> {
        let sql = format!("{SELECT_WITH_ROLES} WHERE u.id = $1 GROUP BY u.id");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.map(|r| UserRow {
            id: r.get("id"),
            email: r.get("email"),
            password_hash: None,
            roles: r.get("roles"),
        }))
    }

    async fn email_exists(&self, email: &str) -> anyhow::Result<bool> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1) AS found")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("found"))
    }
}
