use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::shared::ObjectId;

pub const MAX_COMMENT_CONTENT_LEN: usize = 2000;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: ObjectId,
    pub post_id: ObjectId,
    pub user_id: ObjectId,
    pub comment_content: String,
    pub created_at: DateTime<Utc>,
}

/// A comment joined with its author's username
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommentView {
    pub id: ObjectId,
    pub post_id: ObjectId,
    pub user_id: ObjectId,
    pub username: String,
    pub comment_content: String,
    pub created_at: DateTime<Utc>,
}

pub fn validate_comment_content(content: Option<String>) -> Result<String, String> {
    let content = content
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| "comment_content is required".to_string())?;

    if content.chars().count() > MAX_COMMENT_CONTENT_LEN {
        return Err(format!(
            "comment_content must be at most {} characters",
            MAX_COMMENT_CONTENT_LEN
        ));
    }

    Ok(content)
}
