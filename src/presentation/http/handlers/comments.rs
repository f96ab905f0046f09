use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    application::social::dto::{AddCommentRequest, UpdateCommentRequest},
    domain::social::comment::Comment,
    presentation::http::{errors::AppError, middleware::user::require_user_id, state::AppState},
};

fn extract_client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })
        .unwrap_or("127.0.0.1")
        .to_string()
}

pub async fn get_comments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let comments = state.social.get_comments(id).await?;
    Ok(Json(comments))
}

pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<AddCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;
    body.validate()?;

    let ip = extract_client_ip(&headers);

    // Best-effort cooldown per user per post; an unreachable redis means no
    // limiting rather than a failed request.
    if state.config.comment_cooldown_seconds > 0 {
        if let Ok(mut conn) = state.redis.get_multiplexed_async_connection().await {
            let key = format!("comment_rate:{}:{}:{}", id, user_id, ip);
            let exists: bool = redis::cmd("EXISTS")
                .arg(&key)
                .query_async(&mut conn)
                .await
                .unwrap_or(false);
            if exists {
                return Err(AppError::RateLimited);
            }
            let _: Result<(), _> = redis::cmd("SET")
                .arg(&key)
                .arg("1")
                .arg("EX")
                .arg(state.config.comment_cooldown_seconds)
                .query_async(&mut conn)
                .await;
        }
    }

    let comment = state.social.add_comment(id, user_id, body).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<UpdateCommentRequest>,
) -> Result<Json<Comment>, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;
    body.validate()?;

    let comment = state.social.update_comment(user_id, id, body).await?;
    Ok(Json(comment))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;

    state.social.delete_comment(user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
