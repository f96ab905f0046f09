use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    application::posts::dto::{CreatePostRequest, UpdatePostRequest},
    domain::{
        post::entity::Post,
        shared::pagination::{PageRequest, PagedResponse},
    },
    presentation::http::{errors::AppError, middleware::user::require_user_id, state::AppState},
};

pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PageRequest>,
) -> Result<Json<PagedResponse<Post>>, AppError> {
    let page = state.posts.get_posts(params).await?;
    Ok(Json(page))
}

pub async fn list_user_posts(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<PageRequest>,
) -> Result<Json<PagedResponse<Post>>, AppError> {
    let page = state.posts.get_posts_by_user(user_id, params).await?;
    Ok(Json(page))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Post>, AppError> {
    let post = state.posts.get_post(id).await?;
    Ok(Json(post))
}

pub async fn create_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;
    body.validate()?;

    let post = state.posts.create_post(user_id, body).await?;
    tracing::info!(post_id = %post.id, user_id = %user_id, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<UpdatePostRequest>,
) -> Result<Json<Post>, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;
    body.validate()?;

    let post = state.posts.update_post(user_id, id, body).await?;
    Ok(Json(post))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;

    state.posts.delete_post(user_id, id).await?;
    tracing::info!(post_id = %id, "post deleted with its likes and comments");
    Ok(StatusCode::NO_CONTENT)
}
