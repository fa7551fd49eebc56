use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PostView;
use crate::domain::shared::ObjectId;

/// Full post representation returned by the read endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub username: String,
    pub post_content: String,
    pub archived: bool,
    pub like_count: i64,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostView> for PostResponse {
    fn from(post: PostView) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            username: post.username,
            post_content: post.post_content,
            archived: post.archived,
            like_count: post.like_count,
            comment_count: post.comment_count,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Request body for POST /posts and PUT /posts/{id}
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PostContentRequest {
    pub post_content: Option<String>,
}
