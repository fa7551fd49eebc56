use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::shared::ObjectId;

/// One entry of a post's like listing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LikeView {
    pub username: String,
    pub user_id: ObjectId,
    pub liked_at: DateTime<Utc>,
}

/// Result of liking a post; a repeat like is a success without a new record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    Created,
    AlreadyLiked,
}

impl LikeOutcome {
    pub fn from_inserted(inserted: bool) -> Self {
        if inserted {
            LikeOutcome::Created
        } else {
            LikeOutcome::AlreadyLiked
        }
    }
}
