use crate::helpers::*;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn register_then_me_round_trip() {
    let Some(app) = try_spawn_app().await else {
        return;
    };

    let email = unique_email("me");
    let res = send(
        &app.app,
        json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "nickname": unique_nickname(),
                "email": email,
                "password": "CorrectHorse1!",
            })),
        ),
    )
    .await;
    let body = read_json(expect_status(res, StatusCode::OK).await).await;
    let token = body["token"].as_str().unwrap().to_string();

    let res = send(&app.app, json_request("GET", "/api/auth/me", Some(&token), None)).await;
    let me = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(me["email"].as_str().unwrap(), email);
}

#[tokio::test]
async fn duplicate_email_registration_conflicts() {
    let Some(app) = try_spawn_app().await else {
        return;
    };

    let email = unique_email("dup");
    for expected in [StatusCode::OK, StatusCode::CONFLICT] {
        let res = send(
            &app.app,
            json_request(
                "POST",
                "/api/auth/register",
                None,
                Some(json!({
                    "nickname": unique_nickname(),
                    "email": email,
                    "password": "CorrectHorse1!",
                })),
            ),
        )
        .await;
        expect_status(res, expected).await;
    }
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let Some(app) = try_spawn_app().await else {
        return;
    };

    let email = unique_email("login");
    let res = send(
        &app.app,
        json_request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "nickname": unique_nickname(),
                "email": email,
                "password": "CorrectHorse1!",
            })),
        ),
    )
    .await;
    expect_status(res, StatusCode::OK).await;

    let res = send(
        &app.app,
        json_request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": email, "password": "WrongHorse1!" })),
        ),
    )
    .await;
    expect_status(res, StatusCode::UNAUTHORIZED).await;
}

#[tokio::test]
async fn writes_require_a_token() {
    let Some(app) = try_spawn_app().await else {
        return;
    };

    let res = send(
        &app.app,
        json_request(
            "POST",
            "/api/posts",
            None,
            Some(json!({ "title": "t", "content": "c" })),
        ),
    )
    .await;
    expect_status(res, StatusCode::UNAUTHORIZED).await;
}
