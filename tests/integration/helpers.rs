//! Shared harness for the integration tests. These run the real router
//! against the database named by `DATABASE_URL`; when that variable is not
//! set (or the database is unreachable) each test prints a skip notice and
//! returns early, so the suite stays green on machines without Postgres.

use board_api::{
    application::{posts::use_case::PostUseCase, social::use_case::SocialUseCase},
    config::Config,
    infrastructure::{
        database::pool::create_pool,
        repositories::{
            sqlx_post_repository::SqlxPostRepository,
            sqlx_social_repository::SqlxSocialRepository,
        },
    },
    presentation::http::{routes::create_router, state::AppState},
};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub app: Router,
}

fn build_config(database_url: String) -> Config {
    Config {
        database_url,
        database_max_connections: 5,
        redis_url: std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: "test-jwt-secret".to_string(),
        posts_page_size: 10,
        // Deterministic tests: no comment cooldown.
        comment_cooldown_seconds: 0,
        ignore_missing_migrations: true,
    }
}

pub async fn try_spawn_app() -> Option<TestApp> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("skipping integration test: DATABASE_URL not set");
        return None;
    };
    let config = build_config(database_url);

    let db = match create_pool(&config.database_url, config.database_max_connections).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skipping integration test: database unreachable: {}", e);
            return None;
        }
    };
    let mut migrator = sqlx::migrate!("./migrations");
    migrator.set_ignore_missing(config.ignore_missing_migrations);
    migrator.run(&db).await.expect("migrations failed");

    let redis = redis::Client::open(config.redis_url.clone()).expect("invalid redis url");

    let state = AppState {
        db: db.clone(),
        redis,
        config: config.clone(),
        posts: Arc::new(PostUseCase::new(
            Box::new(SqlxPostRepository::new(db.clone())),
            config.posts_page_size,
        )),
        social: Arc::new(SocialUseCase::new(Box::new(SqlxSocialRepository::new(db)))),
    };

    Some(TestApp {
        app: create_router(state),
    })
}

pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    builder.body(body).expect("failed to build request")
}

pub async fn send(app: &Router, req: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(req).await.expect("request failed")
}

pub async fn read_json(res: axum::response::Response) -> Value {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("failed to parse json")
}

pub async fn read_text(res: axum::response::Response) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    String::from_utf8(bytes.to_vec()).expect("invalid utf8")
}

pub async fn expect_status(
    res: axum::response::Response,
    expected: StatusCode,
) -> axum::response::Response {
    let actual = res.status();

    if actual == expected {
        return res;
    }

    let body = read_text(res).await;
    panic!(
        "HTTP status mismatch. Expected {}, got {}. Response body: {}",
        expected, actual, body
    );
}

pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.com", prefix, Uuid::now_v7())
}

pub fn unique_nickname() -> String {
    let id = Uuid::now_v7().simple().to_string();
    format!("u{}", &id[..12])
}

/// Registers a fresh account and returns `(token, user_id)`.
pub async fn register_user(app: &Router) -> (String, Uuid) {
    let res = send(
        app,
        json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(serde_json::json!({
                "nickname": unique_nickname(),
                "email": unique_email("it"),
                "password": "CorrectHorse1!",
            })),
        ),
    )
    .await;
    let body = read_json(expect_status(res, StatusCode::OK).await).await;
    let token = body["token"].as_str().expect("token missing").to_string();
    let user_id = body["user"]["id"]
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .expect("user id missing");
    (token, user_id)
}

/// Creates a post as the given user and returns its id.
pub async fn create_post(app: &Router, token: &str) -> Uuid {
    let res = send(
        app,
        json_request(
            "POST",
            "/api/posts",
            Some(token),
            Some(serde_json::json!({
                "title": "integration post",
                "content": "body text",
            })),
        ),
    )
    .await;
    let body = read_json(expect_status(res, StatusCode::CREATED).await).await;
    body["id"]
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .expect("post id missing")
}
