use super::error::PostServiceError;
use super::model::validate_post_content;
use super::PostResponse;
use crate::domain::shared::{ObjectId, Ownership, Page};
use crate::infrastructure::repositories::{PostRepository, UserRepository};
use async_trait::async_trait;
use std::sync::Arc;

pub struct PostService {
    post_repo: Arc<PostRepository>,
    user_repo: Arc<UserRepository>,
}

impl PostService {
    pub fn new(post_repo: Arc<PostRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            post_repo,
            user_repo,
        }
    }
}

#[async_trait]
pub trait PostServiceApi: Send + Sync {
    async fn create_post(
        &self,
        user_id: &ObjectId,
        post_content: Option<String>,
    ) -> Result<ObjectId, PostServiceError>;

    async fn get_post(&self, post_id: &ObjectId) -> Result<PostResponse, PostServiceError>;

    async fn get_user_posts(
        &self,
        viewer_id: &ObjectId,
        username: &str,
        page: Page,
    ) -> Result<Vec<PostResponse>, PostServiceError>;

    async fn update_post(
        &self,
        user_id: &ObjectId,
        post_id: &ObjectId,
        post_content: Option<String>,
    ) -> Result<PostResponse, PostServiceError>;

    async fn delete_post(&self, user_id: &ObjectId, post_id: &ObjectId)
        -> Result<(), PostServiceError>;

    async fn set_archived(
        &self,
        user_id: &ObjectId,
        post_id: &ObjectId,
        archived: bool,
    ) -> Result<PostResponse, PostServiceError>;
}

#[async_trait]
impl PostServiceApi for PostService {
    async fn create_post(
        &self,
        user_id: &ObjectId,
        post_content: Option<String>,
    ) -> Result<ObjectId, PostServiceError> {
        let content = validate_post_content(post_content).map_err(PostServiceError::Invalid)?;

        let post = self
            .post_repo
            .create(&ObjectId::new(), user_id, &content)
            .await?;

        tracing::info!(post_id = %post.id, user_id = %user_id, "Post created");

        Ok(post.id)
    }

    async fn get_post(&self, post_id: &ObjectId) -> Result<PostResponse, PostServiceError> {
        self.post_repo
            .find_view_by_id(post_id)
            .await?
            .map(PostResponse::from)
            .ok_or(PostServiceError::NotFound)
    }

    async fn get_user_posts(
        &self,
        viewer_id: &ObjectId,
        username: &str,
        page: Page,
    ) -> Result<Vec<PostResponse>, PostServiceError> {
        let author = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or(PostServiceError::UserNotFound)?;

        // Archived posts stay visible to their owner only
        let include_archived = &author.id == viewer_id;

        let posts = self
            .post_repo
            .find_views_by_user(&author.id, include_archived, &page)
            .await?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    async fn update_post(
        &self,
        user_id: &ObjectId,
        post_id: &ObjectId,
        post_content: Option<String>,
    ) -> Result<PostResponse, PostServiceError> {
        let content = match validate_post_content(post_content) {
            Ok(content) => content,
            Err(msg) => {
                // An unknown or foreign post outranks a bad body
                let owner = self.post_repo.owner_of(post_id).await?;
                ensure_owner(Ownership::resolve(owner.as_ref(), user_id))?;
                return Err(PostServiceError::Invalid(msg));
            }
        };

        let outcome = self
            .post_repo
            .update_content_if_owner(post_id, user_id, &content)
            .await?;
        ensure_owner(outcome)?;

        tracing::info!(post_id = %post_id, "Post updated");

        self.get_post(post_id).await
    }

    async fn delete_post(
        &self,
        user_id: &ObjectId,
        post_id: &ObjectId,
    ) -> Result<(), PostServiceError> {
        let outcome = self.post_repo.delete_if_owner(post_id, user_id).await?;
        ensure_owner(outcome)?;

        tracing::info!(post_id = %post_id, "Post deleted");

        Ok(())
    }

    async fn set_archived(
        &self,
        user_id: &ObjectId,
        post_id: &ObjectId,
        archived: bool,
    ) -> Result<PostResponse, PostServiceError> {
        let outcome = self
            .post_repo
            .set_archived_if_owner(post_id, user_id, archived)
            .await?;
        ensure_owner(outcome)?;

        tracing::info!(post_id = %post_id, archived, "Post archive flag changed");

        self.get_post(post_id).await
    }
}

fn ensure_owner(outcome: Ownership) -> Result<(), PostServiceError> {
    match outcome {
        Ownership::Owner => Ok(()),
        Ownership::NotOwner => Err(PostServiceError::Forbidden),
        Ownership::Missing => Err(PostServiceError::NotFound),
    }
}
