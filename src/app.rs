use axum::Router;
use std::sync::Arc;

use crate::controllers::{
    auth::AuthController, comment::CommentController, like::LikeController, post::PostController,
    user::UserController,
};
use crate::domain::{
    auth::AuthService, comment::CommentService, like::LikeService, post::PostService,
    user::UserService,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::http::{create_router, Controllers};
use crate::infrastructure::repositories::{
    CommentRepository, LikeRepository, PostRepository, UserRepository,
};

/// Wire repositories, services and controllers into the application router
pub fn build_app(pool: Arc<DbPool>, config: Arc<Config>) -> Router {
    // 1. Repositories (inject db pool)
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let post_repo = Arc::new(PostRepository::new(pool.clone()));
    let like_repo = Arc::new(LikeRepository::new(pool.clone()));
    let comment_repo = Arc::new(CommentRepository::new(pool.clone()));

    // 2. Services (inject repositories)
    let auth_service = Arc::new(AuthService::new(user_repo.clone(), config.clone()));
    let user_service = Arc::new(UserService::new(user_repo.clone(), post_repo.clone()));
    let post_service = Arc::new(PostService::new(post_repo.clone(), user_repo.clone()));
    let like_service = Arc::new(LikeService::new(like_repo, post_repo.clone()));
    let comment_service = Arc::new(CommentService::new(comment_repo, post_repo));

    // 3. Controllers (inject services)
    let controllers = Controllers {
        auth: Arc::new(AuthController::new(auth_service, config.clone())),
        user: Arc::new(UserController::new(user_service)),
        post: Arc::new(PostController::new(post_service)),
        like: Arc::new(LikeController::new(like_service)),
        comment: Arc::new(CommentController::new(comment_service)),
    };

    create_router(pool, config, user_repo, controllers)
}
