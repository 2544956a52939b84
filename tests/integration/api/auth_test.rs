//! Authentication API integration tests
//!
//! Tests for registration, the token endpoint and the current-user endpoint.

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use todoapp::backend::auth::handlers::types::{TokenResponse, UserResponse};

use crate::common::auth_helpers::{auth_header, cookie_header, create_test_app, create_test_user};

fn registration(username: &str, email: Option<&str>) -> Value {
    json!({
        "username": username,
        "email": email,
        "first_name": "Alice",
        "last_name": "Liddell",
        "password": "password123"
    })
}

#[tokio::test]
async fn test_create_user_success() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/auth/create/user")
        .json(&registration("alice", Some("alice@example.com")))
        .await;

    response.assert_status(StatusCode::CREATED);
    let user: UserResponse = response.json();
    assert_eq!(user.username, "alice");
    assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    assert!(user.is_active);

    let body: Value = response.json();
    assert!(body.get("hashed_password").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_create_user_duplicate_username() {
    let app = create_test_app().await;
    app.server
        .post("/auth/create/user")
        .json(&registration("alice", Some("alice@example.com")))
        .await
        .assert_status(StatusCode::CREATED);

    let response = app
        .server
        .post("/auth/create/user")
        .json(&registration("alice", Some("other@example.com")))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(app.db.count("Users").await, 1);
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let app = create_test_app().await;
    app.server
        .post("/auth/create/user")
        .json(&registration("alice", Some("shared@example.com")))
        .await
        .assert_status(StatusCode::CREATED);

    app.server
        .post("/auth/create/user")
        .json(&registration("bob", Some("shared@example.com")))
        .await
        .assert_status(StatusCode::CONFLICT);
    assert_eq!(app.db.count("Users").await, 1);
}

#[tokio::test]
async fn test_create_user_without_email() {
    let app = create_test_app().await;

    for username in ["alice", "bob"] {
        app.server
            .post("/auth/create/user")
            .json(&registration(username, None))
            .await
            .assert_status(StatusCode::CREATED);
    }
    assert_eq!(app.db.count("Users").await, 2);
}

#[tokio::test]
async fn test_token_success() {
    let app = create_test_app().await;
    let user = create_test_user(&app.state, "alice", "password123").await.unwrap();

    let response = app
        .server
        .post("/auth/token")
        .form(&[("username", "alice"), ("password", "password123")])
        .await;

    response.assert_status_ok();
    let token: TokenResponse = response.json();
    assert_eq!(token.token_type, "bearer");

    let identity = app.state.auth.resolve_identity(&token.access_token).unwrap();
    assert_eq!(identity.user_id, user.id);
    assert_eq!(identity.username, "alice");
}

#[tokio::test]
async fn test_token_missing_password_is_structured() {
    let app = create_test_app().await;
    create_test_user(&app.state, "alice", "password123").await.unwrap();

    let response = app.server.post("/auth/token").form(&[("username", "alice")]).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["field"], "password");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_create_user_missing_username_is_structured() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/auth/create/user")
        .json(&json!({"first_name": "A", "last_name": "B", "password": "x"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["field"], "username");
    assert_eq!(app.db.count("Users").await, 0);
}

#[tokio::test]
async fn test_token_wrong_password_and_unknown_user_look_the_same() {
    let app = create_test_app().await;
    create_test_user(&app.state, "alice", "password123").await.unwrap();

    let wrong_password = app
        .server
        .post("/auth/token")
        .form(&[("username", "alice"), ("password", "wrong")])
        .await;
    let unknown_user = app
        .server
        .post("/auth/token")
        .form(&[("username", "nobody"), ("password", "password123")])
        .await;

    wrong_password.assert_status(StatusCode::UNAUTHORIZED);
    unknown_user.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.json::<Value>(), unknown_user.json::<Value>());
    assert!(wrong_password.headers().get(header::WWW_AUTHENTICATE).is_some());
}

#[tokio::test]
async fn test_me_with_bearer_token() {
    let app = create_test_app().await;
    let user = create_test_user(&app.state, "alice", "password123").await.unwrap();

    let (name, value) = auth_header(&user.token);
    let response = app.server.get("/auth/me").add_header(name, value).await;

    response.assert_status_ok();
    let me: UserResponse = response.json();
    assert_eq!(me.id, user.id);
    assert_eq!(me.username, user.username);
}

#[tokio::test]
async fn test_me_with_cookie() {
    let app = create_test_app().await;
    let user = create_test_user(&app.state, "alice", "password123").await.unwrap();

    let (name, value) = cookie_header(&user.token);
    app.server
        .get("/auth/me")
        .add_header(name, value)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_me_without_token() {
    let app = create_test_app().await;

    let response = app.server.get("/auth/me").await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let body: Value = response.json();
    assert_eq!(body["error"], "could not validate credentials.");
    assert_eq!(body["status"], 401);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = create_test_app().await;
    let user = create_test_user(&app.state, "alice", "password123").await.unwrap();

    let expired = app
        .state
        .auth
        .issue_token(&user.username, user.id, chrono::Duration::seconds(-30))
        .unwrap();

    let (name, value) = auth_header(&expired);
    app.server
        .get("/auth/me")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
