pub mod auth;
pub mod comment;
pub mod health;
pub mod like;
pub mod post;
pub mod user;

use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;

use crate::domain::shared::ObjectId;
use crate::error::{AppError, AppResult};

/// Plain acknowledgement body for mutations that return no resource
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            message: message.into(),
        })
    }
}

/// Unwrap an optional JSON body. A request without a JSON body is treated
/// as an empty object so field validation reports what is missing.
pub(crate) fn body_or_default<T: Default>(body: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => {
            tracing::debug!("Request without JSON body, using empty payload");
            Ok(T::default())
        }
        Err(rejection) => Err(rejection.into()),
    }
}

/// Parse a path identifier; anything malformed cannot name a resource
pub(crate) fn parse_id(raw: &str, resource: &str) -> AppResult<ObjectId> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("{} not found", resource)))
}
