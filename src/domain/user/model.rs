use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::shared::ObjectId;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MAX_DISPLAY_NAME_LEN: usize = 64;
pub const MAX_BIO_LEN: usize = 500;

static USERNAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]{3,32}$").expect("valid username pattern"));

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: ObjectId,
    pub username: String,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub fn validate_username(username: &str) -> Result<(), String> {
    if USERNAME_PATTERN.is_match(username) {
        Ok(())
    } else {
        Err("Username must be 3-32 characters of letters, digits, '_', '.' or '-'".to_string())
    }
}

pub fn validate_password(password: &str) -> Result<(), String> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    if len > MAX_PASSWORD_LEN {
        return Err(format!(
            "Password must be at most {} characters",
            MAX_PASSWORD_LEN
        ));
    }
    Ok(())
}

pub fn validate_display_name(display_name: &str) -> Result<(), String> {
    if display_name.chars().count() > MAX_DISPLAY_NAME_LEN {
        return Err(format!(
            "Display name must be at most {} characters",
            MAX_DISPLAY_NAME_LEN
        ));
    }
    Ok(())
}

pub fn validate_bio(bio: &str) -> Result<(), String> {
    if bio.chars().count() > MAX_BIO_LEN {
        return Err(format!("Bio must be at most {} characters", MAX_BIO_LEN));
    }
    Ok(())
}
