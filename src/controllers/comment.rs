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
use crate::domain::comment::{CommentResponse, CreateCommentRequest};
use crate::domain::shared::{ObjectId, Page};
use crate::{domain::comment::CommentService, error::AppResult, infrastructure::auth::AuthUser};

pub struct CommentController {
    comment_service: Arc<CommentService>,
}

impl CommentController {
    pub fn new(comment_service: Arc<CommentService>) -> Self {
        Self { comment_service }
    }

    /// POST /posts/{id}/comment - responds with the new comment id
    pub async fn create_comment(
        State(controller): State<Arc<CommentController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(post_id): Path<String>,
        body: Result<Json<CreateCommentRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, Json<ObjectId>)> {
        let post_id = parse_id(&post_id, "Post")?;
        let request = body_or_default(body)?;
        let comment_id = controller
            .comment_service
            .create_comment(&auth_user.user_id, &post_id, request.comment_content)
            .await?;
        Ok((StatusCode::CREATED, Json(comment_id)))
    }

    /// GET /posts/{id}/{page}/allComments
    pub async fn get_comments(
        State(controller): State<Arc<CommentController>>,
        path: Result<Path<(String, i64)>, PathRejection>,
    ) -> AppResult<Json<Vec<CommentResponse>>> {
        let Path((post_id, page)) = path?;
        let page = Page::new(page)?;
        let post_id = parse_id(&post_id, "Post")?;
        let comments = controller
            .comment_service
            .get_comments(&post_id, page)
            .await?;
        Ok(Json(comments))
    }

    /// DELETE /posts/{id}/comment/{commentId}
    pub async fn delete_comment(
        State(controller): State<Arc<CommentController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path((post_id, comment_id)): Path<(String, String)>,
    ) -> AppResult<Json<MessageResponse>> {
        let post_id = parse_id(&post_id, "Post")?;
        let comment_id = parse_id(&comment_id, "Comment")?;
        controller
            .comment_service
            .delete_comment(&auth_user.user_id, &post_id, &comment_id)
            .await?;
        Ok(MessageResponse::new("Comment deleted"))
    }
}
