use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use std::sync::Arc;

use super::body_or_default;
use crate::domain::user::{PublicProfileResponse, UpdateProfileRequest, UserResponse};
use crate::{domain::user::UserService, error::AppResult, infrastructure::auth::AuthUser};

pub struct UserController {
    user_service: Arc<UserService>,
}

impl UserController {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }

    /// GET /users/me - Get current user profile
    pub async fn get_me(
        State(controller): State<Arc<UserController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<UserResponse>> {
        let response = controller
            .user_service
            .get_user_profile(&auth_user.user_id)
            .await?;
        Ok(Json(response))
    }

    /// PATCH /users/me - Update display name and bio
    pub async fn update_me(
        State(controller): State<Arc<UserController>>,
        Extension(auth_user): Extension<AuthUser>,
        body: Result<Json<UpdateProfileRequest>, JsonRejection>,
    ) -> AppResult<Json<UserResponse>> {
        let request = body_or_default(body)?;
        let response = controller
            .user_service
            .update_user_profile(&auth_user.user_id, request)
            .await?;
        Ok(Json(response))
    }

    /// GET /users/{username} - Public profile
    pub async fn get_profile(
        State(controller): State<Arc<UserController>>,
        Path(username): Path<String>,
    ) -> AppResult<Json<PublicProfileResponse>> {
        let response = controller
            .user_service
            .get_public_profile(&username)
            .await?;
        Ok(Json(response))
    }
}
