use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

use super::{body_or_default, parse_id, MessageResponse};
use crate::domain::post::{PostContentRequest, PostResponse};
use crate::domain::shared::{ObjectId, Page};
use crate::{
    domain::post::{PostService, PostServiceApi},
    error::{AppError, AppResult},
    infrastructure::auth::AuthUser,
};

pub struct PostController {
    post_service: Arc<PostService>,
}

impl PostController {
    pub fn new(post_service: Arc<PostService>) -> Self {
        Self { post_service }
    }

    /// POST /posts - Create a post, responds with the new id
    pub async fn create_post(
        State(controller): State<Arc<PostController>>,
        Extension(auth_user): Extension<AuthUser>,
        body: Result<Json<PostContentRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, Json<ObjectId>)> {
        let request = body_or_default(body)?;
        let post_id = controller
            .post_service
            .create_post(&auth_user.user_id, request.post_content)
            .await?;
        Ok((StatusCode::CREATED, Json(post_id)))
    }

    /// GET /posts without an id
    pub async fn missing_post_id() -> AppError {
        AppError::NotFound("Post id is required".to_string())
    }

    /// GET /posts/{id}
    pub async fn get_post(
        State(controller): State<Arc<PostController>>,
        Path(post_id): Path<String>,
    ) -> AppResult<Json<PostResponse>> {
        let post_id = parse_id(&post_id, "Post")?;
        let post = controller.post_service.get_post(&post_id).await?;
        Ok(Json(post))
    }

    /// GET /posts/user/{username}/{page}
    pub async fn get_user_posts(
        State(controller): State<Arc<PostController>>,
        Extension(auth_user): Extension<AuthUser>,
        path: Result<Path<(String, i64)>, PathRejection>,
    ) -> AppResult<Json<Vec<PostResponse>>> {
        let Path((username, page)) = path?;
        let page = Page::new(page)?;
        let posts = controller
            .post_service
            .get_user_posts(&auth_user.user_id, &username, page)
            .await?;
        Ok(Json(posts))
    }

    /// PUT /posts/{id} - Replace the content of an owned post
    pub async fn update_post(
        State(controller): State<Arc<PostController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(post_id): Path<String>,
        body: Result<Json<PostContentRequest>, JsonRejection>,
    ) -> AppResult<Json<PostResponse>> {
        let post_id = parse_id(&post_id, "Post")?;
        let request = body_or_default(body)?;
        let post = controller
            .post_service
            .update_post(&auth_user.user_id, &post_id, request.post_content)
            .await?;
        Ok(Json(post))
    }

    /// DELETE /posts/{id}/delete
    pub async fn delete_post(
        State(controller): State<Arc<PostController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(post_id): Path<String>,
    ) -> AppResult<Json<MessageResponse>> {
        let post_id = parse_id(&post_id, "Post")?;
        controller
            .post_service
            .delete_post(&auth_user.user_id, &post_id)
            .await?;
        Ok(MessageResponse::new("Post deleted"))
    }

    /// PUT /posts/{id}/archive
    pub async fn archive_post(
        State(controller): State<Arc<PostController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(post_id): Path<String>,
    ) -> AppResult<Json<PostResponse>> {
        let post_id = parse_id(&post_id, "Post")?;
        let post = controller
            .post_service
            .set_archived(&auth_user.user_id, &post_id, true)
            .await?;
        Ok(Json(post))
    }

    /// PUT /posts/{id}/unarchive
    pub async fn unarchive_post(
        State(controller): State<Arc<PostController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(post_id): Path<String>,
    ) -> AppResult<Json<PostResponse>> {
        let post_id = parse_id(&post_id, "Post")?;
        let post = controller
            .post_service
            .set_archived(&auth_user.user_id, &post_id, false)
            .await?;
        Ok(Json(post))
    }
}
