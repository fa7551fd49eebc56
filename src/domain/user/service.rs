use super::{
    dto::{PublicProfileResponse, UpdateProfileRequest, UserResponse},
    error::UserServiceError,
    model::{validate_bio, validate_display_name},
};
use crate::domain::shared::ObjectId;
use crate::infrastructure::repositories::{PostRepository, UserRepository};
use std::sync::Arc;

pub struct UserService {
    user_repo: Arc<UserRepository>,
    post_repo: Arc<PostRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>, post_repo: Arc<PostRepository>) -> Self {
        Self {
            user_repo,
            post_repo,
        }
    }

    /// Get the profile of the authenticated user
    pub async fn get_user_profile(
        &self,
        user_id: &ObjectId,
    ) -> Result<UserResponse, UserServiceError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(UserServiceError::AccountGone)?;

        Ok(UserResponse::from(user))
    }

    /// Update display name and/or bio. Empty strings clear the field.
    pub async fn update_user_profile(
        &self,
        user_id: &ObjectId,
        request: UpdateProfileRequest,
    ) -> Result<UserResponse, UserServiceError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(UserServiceError::AccountGone)?;

        let display_name = match request.display_name {
            Some(name) => {
                validate_display_name(&name).map_err(UserServiceError::InvalidProfile)?;
                non_blank(name)
            }
            None => user.display_name,
        };
        let bio = match request.bio {
            Some(bio) => {
                validate_bio(&bio).map_err(UserServiceError::InvalidProfile)?;
                non_blank(bio)
            }
            None => user.bio,
        };

        let updated = self
            .user_repo
            .update_profile(user_id, display_name.as_deref(), bio.as_deref())
            .await?
            .ok_or(UserServiceError::AccountGone)?;

        tracing::info!(user_id = %user_id, "Profile updated");

        Ok(UserResponse::from(updated))
    }

    /// Public profile with the number of visible posts
    pub async fn get_public_profile(
        &self,
        username: &str,
    ) -> Result<PublicProfileResponse, UserServiceError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserServiceError::UnknownUsername(username.to_string()))?;

        let post_count = self.post_repo.count_visible_by_user(&user.id).await?;

        Ok(PublicProfileResponse {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            bio: user.bio,
            post_count,
            created_at: user.created_at,
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
