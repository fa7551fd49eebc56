use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("database error: {0}")]
    Dependency(String),
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
    #[error("no user named '{0}'")]
    UnknownUsername(String),
    /// The session is valid but its account was removed
    #[error("session user no longer exists")]
    AccountGone,
}

impl From<AppError> for UserServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => UserServiceError::InvalidProfile(msg),
            _ => UserServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<UserServiceError> for AppError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::InvalidProfile(msg) => AppError::BadRequest(msg),
            UserServiceError::UnknownUsername(_) => AppError::NotFound("User not found".to_string()),
            UserServiceError::AccountGone => AppError::Unauthorized(err.to_string()),
            UserServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
