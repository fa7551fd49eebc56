use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

use super::{parse_id, MessageResponse};
use crate::domain::like::{LikeOutcome, LikeView};
use crate::domain::shared::Page;
use crate::{domain::like::LikeService, error::AppResult, infrastructure::auth::AuthUser};

pub struct LikeController {
    like_service: Arc<LikeService>,
}

impl LikeController {
    pub fn new(like_service: Arc<LikeService>) -> Self {
        Self { like_service }
    }

    /// POST /posts/{id}/like - 201 on the first like, 200 on repeats
    pub async fn like_post(
        State(controller): State<Arc<LikeController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(post_id): Path<String>,
    ) -> AppResult<(StatusCode, Json<MessageResponse>)> {
        let post_id = parse_id(&post_id, "Post")?;
        let outcome = controller
            .like_service
            .like_post(&auth_user.user_id, &post_id)
            .await?;

        Ok(match outcome {
            LikeOutcome::Created => (StatusCode::CREATED, MessageResponse::new("Post liked")),
            LikeOutcome::AlreadyLiked => (StatusCode::OK, MessageResponse::new("Post already liked")),
        })
    }

    /// DELETE /posts/{id}/like
    pub async fn unlike_post(
        State(controller): State<Arc<LikeController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(post_id): Path<String>,
    ) -> AppResult<Json<MessageResponse>> {
        let post_id = parse_id(&post_id, "Post")?;
        controller
            .like_service
            .unlike_post(&auth_user.user_id, &post_id)
            .await?;
        Ok(MessageResponse::new("Post unliked"))
    }

    /// GET /posts/{id}/{page}/likes
    pub async fn get_likes(
        State(controller): State<Arc<LikeController>>,
        path: Result<Path<(String, i64)>, PathRejection>,
    ) -> AppResult<Json<Vec<LikeView>>> {
        let Path((post_id, page)) = path?;
        let page = Page::new(page)?;
        let post_id = parse_id(&post_id, "Post")?;
        let likes = controller.like_service.get_likes(&post_id, page).await?;
        Ok(Json(likes))
    }
}
