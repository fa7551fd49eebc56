use crate::domain::post::{Post, PostView};
use crate::domain::shared::{ObjectId, Ownership, Page};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use sqlx::{Postgres, Transaction};
use std::sync::Arc;

const POST_VIEW_SELECT: &str = r#"
    SELECT
        p.id,
        p.user_id,
        u.username,
        p.post_content,
        p.archived,
        (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS like_count,
        (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comment_count,
        p.created_at,
        p.updated_at
    FROM posts p
    JOIN users u ON u.id = p.user_id
"#;

pub struct PostRepository {
    pool: Arc<DbPool>,
}

impl PostRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        id: &ObjectId,
        user_id: &ObjectId,
        post_content: &str,
    ) -> AppResult<Post> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (id, user_id, post_content, archived, created_at, updated_at)
            VALUES ($1, $2, $3, FALSE, $4, $4)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(post_content)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(post)
    }

    pub async fn find_view_by_id(&self, post_id: &ObjectId) -> AppResult<Option<PostView>> {
        let pool = self.pool.as_ref();
        let query = format!("{POST_VIEW_SELECT} WHERE p.id = $1");

        let post = sqlx::query_as::<_, PostView>(&query)
            .bind(post_id)
            .fetch_optional(pool)
            .await?;

        Ok(post)
    }

    /// Newest first; ties on timestamp fall back to id order
    pub async fn find_views_by_user(
        &self,
        user_id: &ObjectId,
        include_archived: bool,
        page: &Page,
    ) -> AppResult<Vec<PostView>> {
        let pool = self.pool.as_ref();
        let query = format!(
            "{POST_VIEW_SELECT}
            WHERE p.user_id = $1 AND ($2 OR NOT p.archived)
            ORDER BY p.created_at DESC, p.id DESC
            LIMIT $3 OFFSET $4"
        );

        let posts = sqlx::query_as::<_, PostView>(&query)
            .bind(user_id)
            .bind(include_archived)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        Ok(posts)
    }

    pub async fn exists(&self, post_id: &ObjectId) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
                .bind(post_id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    pub async fn owner_of(&self, post_id: &ObjectId) -> AppResult<Option<ObjectId>> {
        let pool = self.pool.as_ref();
        let owner = sqlx::query_scalar::<_, ObjectId>("SELECT user_id FROM posts WHERE id = $1")
            .bind(post_id)
            .fetch_optional(pool)
            .await?;

        Ok(owner)
    }

    pub async fn count_visible_by_user(&self, user_id: &ObjectId) -> AppResult<i64> {
        let pool = self.pool.as_ref();
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM posts WHERE user_id = $1 AND NOT archived",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    pub async fn update_content_if_owner(
        &self,
        post_id: &ObjectId,
        user_id: &ObjectId,
        post_content: &str,
    ) -> AppResult<Ownership> {
        let mut tx = self.pool.begin().await?;
        let outcome = lock_and_resolve(&mut tx, post_id, user_id).await?;
        if outcome != Ownership::Owner {
            return Ok(outcome);
        }

        sqlx::query("UPDATE posts SET post_content = $1, updated_at = $2 WHERE id = $3")
            .bind(post_content)
            .bind(chrono::Utc::now())
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(outcome)
    }

    /// Comments and likes go with the post through the foreign key cascade
    pub async fn delete_if_owner(
        &self,
        post_id: &ObjectId,
        user_id: &ObjectId,
    ) -> AppResult<Ownership> {
        let mut tx = self.pool.begin().await?;
        let outcome = lock_and_resolve(&mut tx, post_id, user_id).await?;
        if outcome != Ownership::Owner {
            return Ok(outcome);
        }

        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(outcome)
    }

    pub async fn set_archived_if_owner(
        &self,
        post_id: &ObjectId,
        user_id: &ObjectId,
        archived: bool,
    ) -> AppResult<Ownership> {
        let mut tx = self.pool.begin().await?;
        let outcome = lock_and_resolve(&mut tx, post_id, user_id).await?;
        if outcome != Ownership::Owner {
            return Ok(outcome);
        }

        // Repeating the current state is a no-op and leaves updated_at alone
        sqlx::query(
            r#"
            UPDATE posts
            SET archived = $1, updated_at = $2
            WHERE id = $3 AND archived <> $1
            "#,
        )
        .bind(archived)
        .bind(chrono::Utc::now())
        .bind(post_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(outcome)
    }
}

/// Lock the post row for the rest of the transaction and compare owners
async fn lock_and_resolve(
    tx: &mut Transaction<'_, Postgres>,
    post_id: &ObjectId,
    user_id: &ObjectId,
) -> AppResult<Ownership> {
    let owner =
        sqlx::query_scalar::<_, ObjectId>("SELECT user_id FROM posts WHERE id = $1 FOR UPDATE")
            .bind(post_id)
            .fetch_optional(&mut **tx)
            .await?;

    Ok(Ownership::resolve(owner.as_ref(), user_id))
}
