//! HTTP-level integration tests for congratulations.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_birthday, get, post_json, post_json_auth, user_with_token};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_any_user_can_congratulate(pool: PgPool) {
    let (_, author_token) = user_with_token(&pool, "alice").await;
    let (guest_id, guest_token) = user_with_token(&pool, "bob").await;
    let id = create_birthday(
        common::build_test_app(pool.clone()),
        &author_token,
        "Ivan",
        "1990-05-17",
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/birthdays/{id}/congratulations"),
        serde_json::json!({ "text": "  Many happy returns!  " }),
        &guest_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["text"], "Many happy returns!");
    assert_eq!(json["data"]["birthday_id"], id);
    assert_eq!(json["data"]["author_id"], guest_id);
    assert_eq!(json["data"]["author_username"], "bob");
    assert!(json["data"]["created_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_is_oldest_first_and_in_detail(pool: PgPool) {
    let (_, token) = user_with_token(&pool, "alice").await;
    let id = create_birthday(common::build_test_app(pool.clone()), &token, "Ivan", "1990-05-17").await;

    for text in ["first", "second", "third"] {
        let app = common::build_test_app(pool.clone());
        let response = post_json_auth(
            app,
            &format!("/api/v1/birthdays/{id}/congratulations"),
            serde_json::json!({ "text": text }),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/birthdays/{id}/congratulations")).await).await;
    let texts: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["first", "second", "third"]);

    let app = common::build_test_app(pool);
    let detail = body_json(get(app, &format!("/api/v1/birthdays/{id}")).await).await;
    assert_eq!(detail["data"]["congratulations"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_blank_text_returns_400(pool: PgPool) {
    let (_, token) = user_with_token(&pool, "alice").await;
    let id = create_birthday(common::build_test_app(pool.clone()), &token, "Ivan", "1990-05-17").await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/birthdays/{id}/congratulations"),
        serde_json::json!({ "text": "   " }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_anonymous_congratulation_returns_401(pool: PgPool) {
    let (_, token) = user_with_token(&pool, "alice").await;
    let id = create_birthday(common::build_test_app(pool.clone()), &token, "Ivan", "1990-05-17").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/birthdays/{id}/congratulations"),
        serde_json::json!({ "text": "hi" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_congratulating_missing_entry_returns_404(pool: PgPool) {
    let (_, token) = user_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        "/api/v1/birthdays/999999/congratulations",
        serde_json::json!({ "text": "hello?" }),
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
