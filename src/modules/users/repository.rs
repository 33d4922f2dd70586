// Direct access to the `users` table, used to cross-check what the API did.

use sqlx::PgPool;

use super::models::{NewUserRow, UserRow};
use crate::core::{AppError, Result};

const SELECT_USER: &str = r#"
    SELECT id, email, full_name, password, created_at, updated_at,
           verified, banned, roles::text AS roles
    FROM users
"#;

/// Repository for user rows
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user and return the stored row
    pub async fn create(&self, user: &NewUserRow) -> Result<UserRow> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id, email, full_name, password, created_at, updated_at,
                verified, banned, roles
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(&user.password)
        .bind(user.created_at)
        .bind(user.updated_at)
        .bind(user.verified)
        .bind(user.banned)
        .bind(&user.roles)
        .execute(&self.pool)
        .await?;

        tracing::debug!(id = %user.id, email = %user.email, "inserted user row");

        self.find_by_id(&user.id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("user {} after insert", user.id)))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE email = $1 LIMIT 1"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Delete by id; returns whether a row was removed
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
