use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("username already taken")]
    UsernameTaken,
}

impl From<AppError> for AuthServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => AuthServiceError::Invalid(msg),
            AppError::Conflict(_) => AuthServiceError::UsernameTaken,
            AppError::Unauthorized(_) => AuthServiceError::InvalidCredentials,
            _ => AuthServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<AuthServiceError> for AppError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::Invalid(msg) => AppError::BadRequest(msg),
            AuthServiceError::InvalidCredentials => {
                AppError::Unauthorized("Invalid username or password".to_string())
            }
            AuthServiceError::UsernameTaken => {
                AppError::Conflict("Username already taken".to_string())
            }
            AuthServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
