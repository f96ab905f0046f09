use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
};
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::{
    domain::user::{entity::User, value_objects::Nickname},
    presentation::http::{
        errors::AppError,
        middleware::user::{UserClaims, decode_required_user_claims},
        state::AppState,
    },
};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub nickname: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub profile_image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    nickname: String,
    email: String,
    password_hash: String,
    profile_image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: self.id,
            nickname: self.nickname,
            email: self.email,
            profile_image: self.profile_image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn issue_user_token(state: &AppState, user: &User) -> Result<String, AppError> {
    let exp = (chrono::Utc::now() + chrono::Duration::days(7)).timestamp() as usize;
    let claims = UserClaims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
}

async fn fetch_user(state: &AppState, id: Uuid) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, nickname, email, profile_image, created_at, updated_at \
         FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await?;
    Ok(user)
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    body.validate()?;
    let email = body.email.trim().to_lowercase();
    let nickname = Nickname::new(body.nickname.trim().to_string()).map_err(|_| {
        AppError::ValidationError("Nickname must be 2 to 20 characters".to_string())
    })?;

    let email_taken =
        sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)"#)
            .bind(&email)
            .fetch_one(&state.db)
            .await?;
    if email_taken {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let nickname_taken = sqlx::query_scalar::<_, bool>(
        r#"SELECT EXISTS(SELECT 1 FROM users WHERE nickname = $1)"#,
    )
    .bind(&nickname.value)
    .fetch_one(&state.db)
    .await?;
    if nickname_taken {
        return Err(AppError::Conflict("Nickname already in use".to_string()));
    }

    let password_hash = hash(&body.password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

    let id = Uuid::now_v7();
    let insert_result = sqlx::query(
        "INSERT INTO users (id, nickname, email, password_hash, profile_image) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(&nickname.value)
    .bind(&email)
    .bind(&password_hash)
    .bind(
        body.profile_image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty()),
    )
    .execute(&state.db)
    .await;

    if let Err(e) = insert_result {
        // Unique constraint race: the email/nickname was claimed between the
        // checks above and the insert.
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.code().as_deref() == Some("23505") {
                return Err(AppError::Conflict(
                    "Email or nickname already in use".to_string(),
                ));
            }
        }
        return Err(e.into());
    }

    let user = fetch_user(&state, id)
        .await?
        .ok_or_else(|| AppError::Internal("Created user vanished".to_string()))?;
    let token = issue_user_token(&state, &user)?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok(Json(AuthResponse { token, user }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = body.email.trim().to_lowercase();
    if email.is_empty() {
        return Err(AppError::BadRequest("Email is required".to_string()));
    }

    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, nickname, email, password_hash, profile_image, created_at, updated_at \
         FROM users WHERE email = $1",
    )
    .bind(&email)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

    let valid = verify(&body.password, &row.password_hash)
        .map_err(|_| AppError::Internal("Password verification failed".to_string()))?;
    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let user = row.into_user();
    let token = issue_user_token(&state, &user)?;

    Ok(Json(AuthResponse { token, user }))
}

pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<User>, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

    let user = fetch_user(&state, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}

#[derive(Debug, Deserialize)]
pub struct CheckEmailQuery {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckNicknameQuery {
    pub nickname: String,
}

pub async fn check_email(
    State(state): State<AppState>,
    Query(params): Query<CheckEmailQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let email = params.email.trim().to_lowercase();
    let taken =
        sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)"#)
            .bind(&email)
            .fetch_one(&state.db)
            .await?;
    Ok(Json(serde_json::json!({ "available": !taken })))
}

pub async fn check_nickname(
    State(state): State<AppState>,
    Query(params): Query<CheckNicknameQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let taken = sqlx::query_scalar::<_, bool>(
        r#"SELECT EXISTS(SELECT 1 FROM users WHERE nickname = $1)"#,
    )
    .bind(params.nickname.trim())
    .fetch_one(&state.db)
    .await?;
    Ok(Json(serde_json::json!({ "available": !taken })))
}
