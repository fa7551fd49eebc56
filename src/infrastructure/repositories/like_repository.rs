use crate::domain::like::LikeView;
use crate::domain::shared::{ObjectId, Page};
use crate::error::{AppError, AppResult};
use crate::infrastructure::db::DbPool;
use std::sync::Arc;

pub struct LikeRepository {
    pool: Arc<DbPool>,
}

impl LikeRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Insert a like. Returns false when the user already liked the post.
    /// A missing post surfaces as `AppError::NotFound`.
    pub async fn insert(&self, post_id: &ObjectId, user_id: &ObjectId) -> AppResult<bool> {
        let pool = self.pool.as_ref();

        let result = sqlx::query(
            r#"
            INSERT INTO likes (post_id, user_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (post_id, user_id) DO NOTHING
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await
        .map_err(map_missing_post)?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn delete(&self, post_id: &ObjectId, user_id: &ObjectId) -> AppResult<bool> {
        let pool = self.pool.as_ref();

        let result = sqlx::query("DELETE FROM likes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Oldest like first
    pub async fn find_by_post(&self, post_id: &ObjectId, page: &Page) -> AppResult<Vec<LikeView>> {
        let pool = self.pool.as_ref();

        let likes = sqlx::query_as::<_, LikeView>(
            r#"
            SELECT u.username, l.user_id, l.created_at AS liked_at
            FROM likes l
            JOIN users u ON u.id = l.user_id
            WHERE l.post_id = $1
            ORDER BY l.created_at ASC, u.username ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(post_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(likes)
    }
}

/// Translate a foreign key miss on `post_id` into a not-found error
pub(crate) fn map_missing_post(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db)
            if db.is_foreign_key_violation()
                && db.constraint().is_some_and(|c| c.ends_with("post_id_fkey")) =>
        {
            AppError::NotFound("Post not found".to_string())
        }
        _ => AppError::Database(err),
    }
}
