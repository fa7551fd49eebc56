use super::{error::LikeServiceError, LikeOutcome, LikeView};
use crate::domain::shared::{ObjectId, Page};
use crate::infrastructure::repositories::{LikeRepository, PostRepository};
use std::sync::Arc;

pub struct LikeService {
    like_repo: Arc<LikeRepository>,
    post_repo: Arc<PostRepository>,
}

impl LikeService {
    pub fn new(like_repo: Arc<LikeRepository>, post_repo: Arc<PostRepository>) -> Self {
        Self {
            like_repo,
            post_repo,
        }
    }

    /// Record a like; the (post, user) key makes repeats a no-op
    pub async fn like_post(
        &self,
        user_id: &ObjectId,
        post_id: &ObjectId,
    ) -> Result<LikeOutcome, LikeServiceError> {
        let inserted = self.like_repo.insert(post_id, user_id).await?;
        let outcome = LikeOutcome::from_inserted(inserted);

        tracing::debug!(post_id = %post_id, user_id = %user_id, ?outcome, "Post liked");

        Ok(outcome)
    }

    pub async fn unlike_post(
        &self,
        user_id: &ObjectId,
        post_id: &ObjectId,
    ) -> Result<(), LikeServiceError> {
        self.ensure_post_exists(post_id).await?;
        let removed = self.like_repo.delete(post_id, user_id).await?;

        tracing::debug!(post_id = %post_id, user_id = %user_id, removed, "Post unliked");

        Ok(())
    }

    pub async fn get_likes(
        &self,
        post_id: &ObjectId,
        page: Page,
    ) -> Result<Vec<LikeView>, LikeServiceError> {
        self.ensure_post_exists(post_id).await?;

        Ok(self.like_repo.find_by_post(post_id, &page).await?)
    }

    async fn ensure_post_exists(&self, post_id: &ObjectId) -> Result<(), LikeServiceError> {
        if self.post_repo.exists(post_id).await? {
            Ok(())
        } else {
            Err(LikeServiceError::PostNotFound)
        }
    }
}
