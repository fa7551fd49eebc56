use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum LikeServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("post not found")]
    PostNotFound,
}

impl From<AppError> for LikeServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => LikeServiceError::Invalid(msg),
            AppError::NotFound(_) => LikeServiceError::PostNotFound,
            _ => LikeServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<LikeServiceError> for AppError {
    fn from(err: LikeServiceError) -> Self {
        match err {
            LikeServiceError::Invalid(msg) => AppError::BadRequest(msg),
            LikeServiceError::PostNotFound => AppError::NotFound("Post not found".to_string()),
            LikeServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
