use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use uuid::Uuid;

use crate::{
    application::social::dto::LikeStatusResponse,
    presentation::http::{errors::AppError, middleware::user::require_user_id, state::AppState},
};

/// POST /api/posts/{id}/likes — flips the caller's like on the post.
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<LikeStatusResponse>, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;

    let (liked, like_count) = state.social.toggle_like(id, user_id).await?;
    tracing::debug!(post_id = %id, user_id = %user_id, liked, "like toggled");
    Ok(Json(LikeStatusResponse {
        liked,
        like_count: like_count as i64,
    }))
}

/// GET /api/posts/{id}/likes/status — the caller's like state plus the live
/// ledger count.
pub async fn like_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<LikeStatusResponse>, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;

    let (liked, like_count) = state.social.like_status(id, user_id).await?;
    Ok(Json(LikeStatusResponse { liked, like_count }))
}
