use super::{
    dto::{LoginRequest, RegisterRequest},
    error::AuthServiceError,
    password::{hash_password, verify_password},
    JwtManager,
};
use crate::domain::shared::ObjectId;
use crate::domain::user::{
    model::{validate_password, validate_username},
    User,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::UserRepository;
use std::sync::Arc;

pub struct AuthService {
    user_repo: Arc<UserRepository>,
    config: Arc<Config>,
}

impl AuthService {
    pub fn new(user_repo: Arc<UserRepository>, config: Arc<Config>) -> Self {
        Self { user_repo, config }
    }

    /// Register a new account
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AuthServiceError> {
        let username = required(request.username, "username")?;
        let password = required(request.password, "password")?;
        validate_username(&username).map_err(AuthServiceError::Invalid)?;
        validate_password(&password).map_err(AuthServiceError::Invalid)?;
        let email = request
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(AuthServiceError::UsernameTaken);
        }

        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| AuthServiceError::Dependency(e.to_string()))??;

        // The unique index still guards concurrent registrations of the same name
        let user = self
            .user_repo
            .create(&ObjectId::new(), &username, email.as_deref(), &password_hash)
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    /// Check credentials and issue a session token
    pub async fn login(&self, request: LoginRequest) -> Result<(User, String), AuthServiceError> {
        let username = required(request.username, "username")?;
        let password = required(request.password, "password")?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        let stored_hash = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(|e| AuthServiceError::Dependency(e.to_string()))??;

        if !valid {
            tracing::debug!(username = %username, "Rejected login");
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = self.session_manager().generate_token(&user.id, &user.username)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok((user, token))
    }

    fn session_manager(&self) -> JwtManager {
        JwtManager::new(
            self.config.jwt_secret.clone(),
            self.config.session_expiration_hours,
        )
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, AuthServiceError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AuthServiceError::Invalid(format!("{} is required", field)))
}
