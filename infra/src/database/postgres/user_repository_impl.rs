//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use bs_core::domain::entities::user::{NewUser, User};
use bs_core::errors::{AuthError, DomainError};
use bs_core::repositories::UserRepository;

use super::{db_error, UNIQUE_VIOLATION};

const USER_COLUMNS: &str = "id, name, email, password, banned, banned_at, is_admin, created_at";

/// User persistence on top of the `users` table
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| db_error("Failed to read id", e))?,
            name: row
                .try_get("name")
                .map_err(|e| db_error("Failed to read name", e))?,
            email: row
                .try_get("email")
                .map_err(|e| db_error("Failed to read email", e))?,
            password_hash: row
                .try_get("password")
                .map_err(|e| db_error("Failed to read password", e))?,
            banned: row
                .try_get("banned")
                .map_err(|e| db_error("Failed to read banned", e))?,
            banned_at: row
                .try_get::<Option<DateTime<Utc>>, _>("banned_at")
                .map_err(|e| db_error("Failed to read banned_at", e))?,
            is_admin: row
                .try_get("is_admin")
                .map_err(|e| db_error("Failed to read is_admin", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("Failed to read created_at", e))?,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = $1 LIMIT 1", USER_COLUMNS);
        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("User lookup failed", e))?;
        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = $1 LIMIT 1", USER_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("User lookup failed", e))?;
        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let query = format!(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING {}",
            USER_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(&new_user.name)
            .bind(&new_user.email)
            .bind(&new_user.password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                // duplicate email raced past the pre-check
                sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                    AuthError::UserAlreadyExists.into()
                }
                _ => db_error("Failed to create user", e),
            })?;
        Self::row_to_user(&row)
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let query = format!("SELECT {} FROM users ORDER BY created_at DESC", USER_COLUMNS);
        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("User listing failed", e))?;
        rows.iter().map(Self::row_to_user).collect()
    }

    async fn set_banned(&self, id: i32, banned: bool) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE users SET banned = $1, banned_at = CASE WHEN $1 THEN NOW() ELSE NULL END \
             WHERE id = $2",
        )
        .bind(banned)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Ban update failed", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_account(&self, id: i32) -> Result<bool, DomainError> {
        // the one transaction in the design: the account and everything
        // it owns disappear together or not at all
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to open transaction", e))?;

        sqlx::query("DELETE FROM likes WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete likes", e))?;
        sqlx::query("DELETE FROM comments WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete comments", e))?;
        sqlx::query("UPDATE views SET user_id = NULL WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to detach views", e))?;
        // post interactions cascade away with the posts
        sqlx::query("DELETE FROM blog_posts WHERE author_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete posts", e))?;
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to delete user", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit account deletion", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("User count failed", e))?;
        row.try_get("count")
            .map_err(|e| db_error("Failed to read count", e))
    }
}
