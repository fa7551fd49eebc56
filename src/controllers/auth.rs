use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::sync::Arc;

use super::body_or_default;
use crate::domain::auth::{LoginRequest, RegisterRequest, SESSION_COOKIE};
use crate::domain::user::UserResponse;
use crate::{domain::auth::AuthService, error::AppResult, infrastructure::config::Config};

pub struct AuthController {
    auth_service: Arc<AuthService>,
    config: Arc<Config>,
}

impl AuthController {
    pub fn new(auth_service: Arc<AuthService>, config: Arc<Config>) -> Self {
        Self {
            auth_service,
            config,
        }
    }

    /// POST /auth/register - Create an account
    pub async fn register(
        State(controller): State<Arc<AuthController>>,
        body: Result<Json<RegisterRequest>, JsonRejection>,
    ) -> AppResult<(StatusCode, Json<UserResponse>)> {
        let request = body_or_default(body)?;
        let user = controller.auth_service.register(request).await?;
        Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
    }

    /// POST /auth/login - Check credentials and set the session cookie
    pub async fn login(
        State(controller): State<Arc<AuthController>>,
        jar: CookieJar,
        body: Result<Json<LoginRequest>, JsonRejection>,
    ) -> AppResult<(CookieJar, Json<UserResponse>)> {
        let request = body_or_default(body)?;
        let (user, token) = controller.auth_service.login(request).await?;

        let cookie = Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(controller.config.cookie_secure)
            .build();

        Ok((jar.add(cookie), Json(UserResponse::from(user))))
    }

    /// POST /auth/logout - Drop the session cookie
    pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
        let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
        (jar, StatusCode::NO_CONTENT)
    }
}
