use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use bcrypt::{DEFAULT_COST, hash};
use serde::Deserialize;
use validator::Validate;

use crate::{
    domain::user::{entity::User, value_objects::Nickname},
    presentation::http::{errors::AppError, middleware::user::require_user_id, state::AppState},
};

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub nickname: String,
    pub profile_image: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<User>, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;
    let nickname = Nickname::new(body.nickname.trim().to_string()).map_err(|_| {
        AppError::ValidationError("Nickname must be 2 to 20 characters".to_string())
    })?;

    // Only reject the nickname when some other account holds it.
    let taken_by_other = sqlx::query_scalar::<_, bool>(
        r#"SELECT EXISTS(SELECT 1 FROM users WHERE nickname = $1 AND id != $2)"#,
    )
    .bind(&nickname.value)
    .bind(user_id)
    .fetch_one(&state.db)
    .await?;
    if taken_by_other {
        return Err(AppError::Conflict("Nickname already in use".to_string()));
    }

    let updated = sqlx::query(
        "UPDATE users SET nickname = $2, profile_image = $3, updated_at = NOW() WHERE id = $1",
    )
    .bind(user_id)
    .bind(&nickname.value)
    .bind(
        body.profile_image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty()),
    )
    .execute(&state.db)
    .await?;
    if updated.rows_affected() == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    let user = sqlx::query_as::<_, User>(
        "SELECT id, nickname, email, profile_image, created_at, updated_at \
         FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_one(&state.db)
    .await?;
    Ok(Json(user))
}

pub async fn update_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<UpdatePasswordRequest>,
) -> Result<StatusCode, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;
    body.validate()?;

    let password_hash = hash(&body.password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

    let updated =
        sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .bind(&password_hash)
            .execute(&state.db)
            .await?;
    if updated.rows_affected() == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_account(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let user_id = require_user_id(&headers, &state.config.jwt_secret)?;

    let deleted = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&state.db)
        .await?;
    if deleted.rows_affected() == 0 {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    tracing::info!(user_id = %user_id, "account deleted");
    Ok(StatusCode::NO_CONTENT)
}
