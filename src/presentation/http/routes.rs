use super::{
    handlers::{auth, comments, health, posts, social, users},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/check-email", get(auth::check_email))
        .route("/api/auth/check-nickname", get(auth::check_nickname))
        // Account
        .route("/api/users/profile", put(users::update_profile))
        .route("/api/users/password", put(users::update_password))
        .route("/api/users", delete(users::delete_account))
        // Posts
        .route("/api/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/api/posts/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/api/posts/user/{user_id}", get(posts::list_user_posts))
        // Comments
        .route(
            "/api/posts/{id}/comments",
            get(comments::get_comments).post(comments::add_comment),
        )
        .route(
            "/api/comments/{id}",
            put(comments::update_comment).delete(comments::delete_comment),
        )
        // Likes
        .route("/api/posts/{id}/likes", post(social::toggle_like))
        .route("/api/posts/{id}/likes/status", get(social::like_status))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
