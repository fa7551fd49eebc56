use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum CommentServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("post not found")]
    PostNotFound,
    #[error("comment not found")]
    NotFound,
    #[error("not the owner of this comment")]
    Forbidden,
}

impl From<AppError> for CommentServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => CommentServiceError::Invalid(msg),
            AppError::NotFound(_) => CommentServiceError::PostNotFound,
            AppError::Forbidden(_) => CommentServiceError::Forbidden,
            _ => CommentServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<CommentServiceError> for AppError {
    fn from(err: CommentServiceError) -> Self {
        match err {
            CommentServiceError::Invalid(msg) => AppError::BadRequest(msg),
            CommentServiceError::PostNotFound => AppError::NotFound("Post not found".to_string()),
            CommentServiceError::NotFound => AppError::NotFound("Comment not found".to_string()),
            CommentServiceError::Forbidden => {
                AppError::Forbidden("Only the comment owner can delete it".to_string())
            }
            CommentServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
