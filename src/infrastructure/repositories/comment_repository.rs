use super::like_repository::map_missing_post;
use crate::domain::comment::{Comment, CommentView};
use crate::domain::shared::{ObjectId, Ownership, Page};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use std::sync::Arc;

pub struct CommentRepository {
    pool: Arc<DbPool>,
}

impl CommentRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        id: &ObjectId,
        post_id: &ObjectId,
        user_id: &ObjectId,
        comment_content: &str,
    ) -> AppResult<Comment> {
        let pool = self.pool.as_ref();

        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (id, post_id, user_id, comment_content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(post_id)
        .bind(user_id)
        .bind(comment_content)
        .bind(chrono::Utc::now())
        .fetch_one(pool)
        .await
        .map_err(map_missing_post)?;

        Ok(comment)
    }

    /// Oldest comment first
    pub async fn find_by_post(
        &self,
        post_id: &ObjectId,
        page: &Page,
    ) -> AppResult<Vec<CommentView>> {
        let pool = self.pool.as_ref();

        let comments = sqlx::query_as::<_, CommentView>(
            r#"
            SELECT c.id, c.post_id, c.user_id, u.username, c.comment_content, c.created_at
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.post_id = $1
            ORDER BY c.created_at ASC, c.id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(post_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(comments)
    }

    /// Delete a comment of the given post if `user_id` wrote it
    pub async fn delete_if_owner(
        &self,
        post_id: &ObjectId,
        comment_id: &ObjectId,
        user_id: &ObjectId,
    ) -> AppResult<Ownership> {
        let mut tx = self.pool.begin().await?;

        let owner = sqlx::query_scalar::<_, ObjectId>(
            "SELECT user_id FROM comments WHERE id = $1 AND post_id = $2 FOR UPDATE",
        )
        .bind(comment_id)
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await?;

        let outcome = Ownership::resolve(owner.as_ref(), user_id);
        if outcome != Ownership::Owner {
            return Ok(outcome);
        }

        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(comment_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(outcome)
    }
}
