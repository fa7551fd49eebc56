use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::domain::auth::SESSION_COOKIE;
use crate::domain::shared::ObjectId;
use crate::infrastructure::config::Config;
use crate::{
    domain::auth::JwtManager, error::AppError, infrastructure::repositories::UserRepository,
};

/// User context injected into request extensions after authentication
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: ObjectId,
    pub username: String,
}

/// Authentication middleware. Accepts the session cookie set at login,
/// or the same token as a Bearer header.
pub async fn auth_middleware(
    State((user_repo, config)): State<(Arc<UserRepository>, Arc<Config>)>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = session_token(&request)
        .ok_or_else(|| AppError::Unauthorized("Missing session".to_string()))?;

    // Validate JWT token
    let jwt_manager = JwtManager::new(config.jwt_secret.clone(), config.session_expiration_hours);
    let user_id = jwt_manager.extract_user_id(&token)?;

    // Verify user exists in database
    let user = user_repo
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    // Add user context to request
    request.extensions_mut().insert(AuthUser {
        user_id: user.id,
        username: user.username,
    });

    Ok(next.run(request).await)
}

fn session_token(request: &Request) -> Option<String> {
    let headers = request.headers();

    if let Some(cookie) = CookieJar::from_headers(headers).get(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}
