use super::{error::CommentServiceError, model::validate_comment_content, CommentResponse};
use crate::domain::shared::{ObjectId, Ownership, Page};
use crate::infrastructure::repositories::{CommentRepository, PostRepository};
use std::sync::Arc;

pub struct CommentService {
    comment_repo: Arc<CommentRepository>,
    post_repo: Arc<PostRepository>,
}

impl CommentService {
    pub fn new(comment_repo: Arc<CommentRepository>, post_repo: Arc<PostRepository>) -> Self {
        Self {
            comment_repo,
            post_repo,
        }
    }

    /// Attach a comment to an existing post
    pub async fn create_comment(
        &self,
        user_id: &ObjectId,
        post_id: &ObjectId,
        comment_content: Option<String>,
    ) -> Result<ObjectId, CommentServiceError> {
        self.ensure_post_exists(post_id).await?;
        let content =
            validate_comment_content(comment_content).map_err(CommentServiceError::Invalid)?;

        // A post deleted since the check above surfaces as a foreign key miss
        let comment = self
            .comment_repo
            .create(&ObjectId::new(), post_id, user_id, &content)
            .await?;

        tracing::info!(comment_id = %comment.id, post_id = %post_id, "Comment created");

        Ok(comment.id)
    }

    pub async fn get_comments(
        &self,
        post_id: &ObjectId,
        page: Page,
    ) -> Result<Vec<CommentResponse>, CommentServiceError> {
        self.ensure_post_exists(post_id).await?;

        let comments = self.comment_repo.find_by_post(post_id, &page).await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    /// Only the comment's author may delete it, whoever owns the post
    pub async fn delete_comment(
        &self,
        user_id: &ObjectId,
        post_id: &ObjectId,
        comment_id: &ObjectId,
    ) -> Result<(), CommentServiceError> {
        match self
            .comment_repo
            .delete_if_owner(post_id, comment_id, user_id)
            .await?
        {
            Ownership::Owner => {
                tracing::info!(comment_id = %comment_id, post_id = %post_id, "Comment deleted");
                Ok(())
            }
            Ownership::NotOwner => Err(CommentServiceError::Forbidden),
            Ownership::Missing => Err(CommentServiceError::NotFound),
        }
    }

    async fn ensure_post_exists(&self, post_id: &ObjectId) -> Result<(), CommentServiceError> {
        if self.post_repo.exists(post_id).await? {
            Ok(())
        } else {
            Err(CommentServiceError::PostNotFound)
        }
    }
}
