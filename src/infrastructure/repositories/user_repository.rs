use crate::domain::shared::ObjectId;
use crate::infrastructure::db::DbPool;
use crate::{
    domain::user::User,
    error::{AppError, AppResult},
};
use std::sync::Arc;

pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Find user by ID
    pub async fn find_by_id(&self, user_id: &ObjectId) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by username (exact match)
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Create a new user. A taken username is reported as a conflict.
    pub async fn create(
        &self,
        id: &ObjectId,
        username: &str,
        email: Option<&str>,
        password_hash: &str,
    ) -> AppResult<User> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(now)
        .fetch_one(pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Username is already taken".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(user)
    }

    /// Overwrite display name and bio; `None` stores NULL
    pub async fn update_profile(
        &self,
        user_id: &ObjectId,
        display_name: Option<&str>,
        bio: Option<&str>,
    ) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET display_name = $1, bio = $2, updated_at = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(display_name)
        .bind(bio)
        .bind(now)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }
}
