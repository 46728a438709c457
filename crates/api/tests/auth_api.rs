//! HTTP-level tests for admin login and identity.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, memory_storage, post_json, seed_admin, ADMIN_PASSWORD};
use serde_json::json;

async fn login(
    app: axum::Router,
    username: &str,
    password: &str,
) -> axum::http::Response<axum::body::Body> {
    post_json(
        app,
        "/api/auth/login",
        json!({ "username": username, "password": password }),
    )
    .await
}

#[tokio::test]
async fn test_login_success() {
    let storage = memory_storage();
    let admin = seed_admin(storage.as_ref()).await;
    let app = common::build_test_app(storage);

    let response = login(app, "admin", ADMIN_PASSWORD).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["accessToken"].is_string());
    assert_eq!(json["tokenType"], "Bearer");
    assert_eq!(json["expiresIn"], 3600);
    assert_eq!(json["user"]["id"], admin.id.to_string());
    assert_eq!(json["user"]["username"], "admin");
    assert!(json["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_login_token_unlocks_lists() {
    let storage = memory_storage();
    seed_admin(storage.as_ref()).await;

    let response = login(common::build_test_app(storage.clone()), "admin", ADMIN_PASSWORD).await;
    let token = body_json(response).await["accessToken"]
        .as_str()
        .unwrap()
        .to_string();

    let response = get_auth(
        common::build_test_app(storage),
        "/api/location-requests",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let storage = memory_storage();
    seed_admin(storage.as_ref()).await;
    let app = common::build_test_app(storage);

    let response = login(app, "admin", "incorrect_password").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = common::build_test_app(memory_storage());

    let response = login(app, "nobody", "whatever-password").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_empty_username() {
    let app = common::build_test_app(memory_storage());

    let response = login(app, "", "whatever-password").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["field"], "username");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = common::build_test_app(memory_storage());

    let response = post_json(app, "/api/auth/login", json!({ "username": "admin" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_me_returns_current_admin() {
    let storage = memory_storage();
    let token = common::admin_token(storage.as_ref()).await;
    let app = common::build_test_app(storage);

    let response = get_auth(app, "/api/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["username"], "admin");
}

#[tokio::test]
async fn test_me_rejects_token_for_unknown_user() {
    let storage = memory_storage();
    let token = matjib_api::auth::jwt::generate_access_token(
        uuid::Uuid::new_v4(),
        "ghost",
        &common::test_config().jwt,
    )
    .unwrap();
    let app = common::build_test_app(storage);

    let response = get_auth(app, "/api/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = common::build_test_app(memory_storage());

    let response = get_auth(app, "/api/auth/me", "not.a.jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_me_requires_header() {
    let app = common::build_test_app(memory_storage());

    let response = get(app, "/api/auth/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Missing Authorization header");
}
