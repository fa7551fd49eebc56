use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::{
    controllers::{
        auth::AuthController, comment::CommentController, health, like::LikeController,
        post::PostController, user::UserController,
    },
    error::AppError,
    infrastructure::auth::{auth_middleware, request_id_middleware},
};

use crate::infrastructure::repositories::UserRepository;

/// Controllers and shared handles the router is assembled from
pub struct Controllers {
    pub auth: Arc<AuthController>,
    pub user: Arc<UserController>,
    pub post: Arc<PostController>,
    pub like: Arc<LikeController>,
    pub comment: Arc<CommentController>,
}

/// Build the application router with all routes configured
pub fn create_router(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    user_repo: Arc<UserRepository>,
    controllers: Controllers,
) -> Router {
    let auth_layer = middleware::from_fn_with_state((user_repo, config), auth_middleware);

    // Auth routes (public - no session required)
    let auth_routes = Router::new()
        .route("/auth/register", post(AuthController::register))
        .route("/auth/login", post(AuthController::login))
        .route("/auth/logout", post(AuthController::logout))
        .with_state(controllers.auth);

    // User routes (require authentication)
    let user_routes = Router::new()
        .route(
            "/users/me",
            get(UserController::get_me).patch(UserController::update_me),
        )
        .route("/users/:username", get(UserController::get_profile))
        .with_state(controllers.user)
        .layer(auth_layer.clone());

    // Post routes (require authentication)
    let post_routes = Router::new()
        .route(
            "/posts",
            post(PostController::create_post).get(PostController::missing_post_id),
        )
        .route(
            "/posts/:post_id",
            get(PostController::get_post).put(PostController::update_post),
        )
        .route("/posts/user/:username/:page", get(PostController::get_user_posts))
        .route("/posts/:post_id/delete", delete(PostController::delete_post))
        .route("/posts/:post_id/archive", put(PostController::archive_post))
        .route("/posts/:post_id/unarchive", put(PostController::unarchive_post))
        .with_state(controllers.post)
        .layer(auth_layer.clone());

    let like_routes = Router::new()
        .route(
            "/posts/:post_id/like",
            post(LikeController::like_post).delete(LikeController::unlike_post),
        )
        .route("/posts/:post_id/:page/likes", get(LikeController::get_likes))
        .with_state(controllers.like)
        .layer(auth_layer.clone());

    let comment_routes = Router::new()
        .route("/posts/:post_id/comment", post(CommentController::create_comment))
        .route(
            "/posts/:post_id/:page/allComments",
            get(CommentController::get_comments),
        )
        .route(
            "/posts/:post_id/comment/:comment_id",
            delete(CommentController::delete_comment),
        )
        .with_state(controllers.comment)
        .layer(auth_layer);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .merge(auth_routes)
        .merge(user_routes)
        .merge(post_routes)
        .merge(like_routes)
        .merge(comment_routes)
        .fallback(unknown_route)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(middleware::from_fn(unsupported_method_as_not_found)),
        )
}

async fn unknown_route() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// A known path under the wrong method is answered like an unknown path
async fn unsupported_method_as_not_found(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    tracing::debug!(%method, %path, "No handler for method");
    unknown_route().await.into_response()
}

/// Bind the configured address and serve the router until shutdown
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
