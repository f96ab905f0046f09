use crate::helpers::*;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn like_toggle_flips_state_and_counter() {
    let Some(app) = try_spawn_app().await else {
        return;
    };

    let (token, _) = register_user(&app.app).await;
    let post_id = create_post(&app.app, &token).await;
    let likes_uri = format!("/api/posts/{}/likes", post_id);

    let res = send(&app.app, json_request("POST", &likes_uri, Some(&token), None)).await;
    let body = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["liked"], json!(true));
    assert_eq!(body["like_count"], json!(1));

    let res = send(&app.app, json_request("POST", &likes_uri, Some(&token), None)).await;
    let body = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["liked"], json!(false));
    assert_eq!(body["like_count"], json!(0));

    let res = send(
        &app.app,
        json_request(
            "GET",
            &format!("/api/posts/{}/likes/status", post_id),
            Some(&token),
            None,
        ),
    )
    .await;
    let body = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["liked"], json!(false));
    assert_eq!(body["like_count"], json!(0));
}

#[tokio::test]
async fn cascade_delete_guards_ownership_then_removes_children() {
    let Some(app) = try_spawn_app().await else {
        return;
    };

    let (owner_token, _) = register_user(&app.app).await;
    let (visitor_token, _) = register_user(&app.app).await;
    let post_id = create_post(&app.app, &owner_token).await;
    let post_uri = format!("/api/posts/{}", post_id);

    // The visitor likes and comments on the post.
    let res = send(
        &app.app,
        json_request(
            "POST",
            &format!("/api/posts/{}/likes", post_id),
            Some(&visitor_token),
            None,
        ),
    )
    .await;
    let body = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["liked"], json!(true));

    let res = send(
        &app.app,
        json_request(
            "POST",
            &format!("/api/posts/{}/comments", post_id),
            Some(&visitor_token),
            Some(json!({ "content": "nice post" })),
        ),
    )
    .await;
    expect_status(res, StatusCode::CREATED).await;

    // A non-owner may not delete, and nothing changes when they try.
    let res = send(
        &app.app,
        json_request("DELETE", &post_uri, Some(&visitor_token), None),
    )
    .await;
    expect_status(res, StatusCode::FORBIDDEN).await;

    let res = send(
        &app.app,
        json_request(
            "GET",
            &format!("/api/posts/{}/likes/status", post_id),
            Some(&visitor_token),
            None,
        ),
    )
    .await;
    let body = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["liked"], json!(true));
    assert_eq!(body["like_count"], json!(1));

    // The owner's delete removes the post and all its children.
    let res = send(
        &app.app,
        json_request("DELETE", &post_uri, Some(&owner_token), None),
    )
    .await;
    expect_status(res, StatusCode::NO_CONTENT).await;

    let res = send(&app.app, json_request("GET", &post_uri, None, None)).await;
    expect_status(res, StatusCode::NOT_FOUND).await;

    let res = send(
        &app.app,
        json_request(
            "POST",
            &format!("/api/posts/{}/likes", post_id),
            Some(&visitor_token),
            None,
        ),
    )
    .await;
    expect_status(res, StatusCode::NOT_FOUND).await;

    let res = send(
        &app.app,
        json_request(
            "GET",
            &format!("/api/posts/{}/comments", post_id),
            None,
            None,
        ),
    )
    .await;
    expect_status(res, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn two_users_share_one_ledger() {
    let Some(app) = try_spawn_app().await else {
        return;
    };

    let (token1, _) = register_user(&app.app).await;
    let (token2, _) = register_user(&app.app).await;
    let post_id = create_post(&app.app, &token1).await;
    let likes_uri = format!("/api/posts/{}/likes", post_id);

    let res = send(&app.app, json_request("POST", &likes_uri, Some(&token1), None)).await;
    let body = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["like_count"], json!(1));

    let res = send(&app.app, json_request("POST", &likes_uri, Some(&token2), None)).await;
    let body = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["liked"], json!(true));
    assert_eq!(body["like_count"], json!(2));

    // User 1 un-likes; user 2's like remains.
    let res = send(&app.app, json_request("POST", &likes_uri, Some(&token1), None)).await;
    let body = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["liked"], json!(false));
    assert_eq!(body["like_count"], json!(1));

    let res = send(
        &app.app,
        json_request(
            "GET",
            &format!("/api/posts/{}/likes/status", post_id),
            Some(&token2),
            None,
        ),
    )
    .await;
    let body = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["liked"], json!(true));
    assert_eq!(body["like_count"], json!(1));
}

#[tokio::test]
async fn comment_editing_is_author_only() {
    let Some(app) = try_spawn_app().await else {
        return;
    };

    let (author_token, _) = register_user(&app.app).await;
    let (other_token, _) = register_user(&app.app).await;
    let post_id = create_post(&app.app, &author_token).await;

    let res = send(
        &app.app,
        json_request(
            "POST",
            &format!("/api/posts/{}/comments", post_id),
            Some(&author_token),
            Some(json!({ "content": "original" })),
        ),
    )
    .await;
    let comment = read_json(expect_status(res, StatusCode::CREATED).await).await;
    let comment_id = comment["id"].as_str().unwrap().to_string();
    let comment_uri = format!("/api/comments/{}", comment_id);

    let res = send(
        &app.app,
        json_request(
            "PUT",
            &comment_uri,
            Some(&other_token),
            Some(json!({ "content": "hijacked" })),
        ),
    )
    .await;
    expect_status(res, StatusCode::FORBIDDEN).await;

    let res = send(
        &app.app,
        json_request(
            "PUT",
            &comment_uri,
            Some(&author_token),
            Some(json!({ "content": "edited" })),
        ),
    )
    .await;
    let body = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(body["content"], json!("edited"));

    let res = send(
        &app.app,
        json_request("DELETE", &comment_uri, Some(&author_token), None),
    )
    .await;
    expect_status(res, StatusCode::NO_CONTENT).await;
}
