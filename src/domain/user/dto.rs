use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;
use crate::domain::shared::ObjectId;

/// Response for GET /users/me and the auth endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            display_name: user.display_name,
            bio: user.bio,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Response for GET /users/{username}
#[derive(Debug, Serialize, Deserialize)]
pub struct PublicProfileResponse {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub post_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Request body for PATCH /users/me
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub bio: Option<String>,
}
