use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::shared::ObjectId;

pub const MAX_POST_CONTENT_LEN: usize = 5000;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: ObjectId,
    pub user_id: ObjectId,
    pub post_content: String,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post joined with its author and engagement counters
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostView {
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

/// Trim and check post content; `None` and blank strings are both missing
pub fn validate_post_content(content: Option<String>) -> Result<String, String> {
    let content = content
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| "post_content is required".to_string())?;

    if content.chars().count() > MAX_POST_CONTENT_LEN {
        return Err(format!(
            "post_content must be at most {} characters",
            MAX_POST_CONTENT_LEN
        ));
    }

    Ok(content)
}
