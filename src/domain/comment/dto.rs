use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CommentView;
use crate::domain::shared::ObjectId;

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentResponse {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub post_id: ObjectId,
    pub user_id: ObjectId,
    pub username: String,
    pub comment_content: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentView> for CommentResponse {
    fn from(comment: CommentView) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            user_id: comment.user_id,
            username: comment.username,
            comment_content: comment.comment_content,
            created_at: comment.created_at,
        }
    }
}

/// Request body for POST /posts/{id}/comment
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub comment_content: Option<String>,
}
