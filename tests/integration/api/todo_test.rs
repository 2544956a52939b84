//! To-do API integration tests
//!
//! CRUD through the JSON endpoints, including owner isolation.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use todoapp::shared::{Todo, TransactionResponse};

use crate::common::auth_helpers::{auth_header, create_test_app, create_test_user, TestApp, TestUser};

async fn create(app: &TestApp, user: &TestUser, body: Value) -> axum_test::TestResponse {
    let (name, value) = auth_header(&user.token);
    app.server.post("/create-todo").add_header(name, value).json(&body).await
}

async fn list(app: &TestApp, user: &TestUser) -> Vec<Todo> {
    let (name, value) = auth_header(&user.token);
    let response = app.server.get("/todo").add_header(name, value).await;
    response.assert_status_ok();
    response.json()
}

#[tokio::test]
async fn test_buy_milk_is_visible_only_to_its_owner() {
    let app = create_test_app().await;
    let alice = create_test_user(&app.state, "alice", "password123").await.unwrap();
    let bob = create_test_user(&app.state, "bob", "password123").await.unwrap();

    let response = create(
        &app,
        &alice,
        json!({"title": "buy milk", "priority": 3, "complete": false}),
    )
    .await;
    response.assert_status(StatusCode::CREATED);
    let created: Todo = response.json();

    assert_eq!(created.title, "buy milk");
    assert_eq!(created.priority, 3);
    assert!(!created.complete);
    assert_eq!(created.owner_id, alice.id);

    assert_eq!(list(&app, &alice).await, vec![created]);
    assert!(list(&app, &bob).await.is_empty());
}

#[tokio::test]
async fn test_priority_boundaries() {
    let app = create_test_app().await;
    let alice = create_test_user(&app.state, "alice", "password123").await.unwrap();

    for priority in [0, 6] {
        let response = create(&app, &alice, json!({"title": "x", "priority": priority})).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["field"], "priority");
        assert_eq!(body["error"], "The priority must be between 1-5");
    }
    for priority in [1, 5] {
        create(&app, &alice, json!({"title": "x", "priority": priority}))
            .await
            .assert_status(StatusCode::CREATED);
    }

    assert_eq!(app.db.count("todos").await, 2);
}

#[tokio::test]
async fn test_blank_title_and_long_description_rejected() {
    let app = create_test_app().await;
    let alice = create_test_user(&app.state, "alice", "password123").await.unwrap();

    let response = create(&app, &alice, json!({"title": "  ", "priority": 1})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["field"], "title");

    let response = create(
        &app,
        &alice,
        json!({"title": "x", "description": "a".repeat(501), "priority": 1}),
    )
    .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["field"], "description");

    create(&app, &alice, json!({"title": "x", "description": "a".repeat(500), "priority": 1}))
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_malformed_body_reports_the_field() {
    let app = create_test_app().await;
    let alice = create_test_user(&app.state, "alice", "password123").await.unwrap();

    let response = create(&app, &alice, json!({"priority": 3})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["field"], "title");
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("missing field `title`"));

    let response = create(&app, &alice, json!({"title": "x", "priority": "high"})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["field"], "priority");
    assert_eq!(body["status"], 400);

    assert_eq!(app.db.count("todos").await, 0);
}

#[tokio::test]
async fn test_read_update_delete_roundtrip() {
    let app = create_test_app().await;
    let alice = create_test_user(&app.state, "alice", "password123").await.unwrap();
    let todo: Todo = create(&app, &alice, json!({"title": "draft", "priority": 2})).await.json();

    let (name, value) = auth_header(&alice.token);
    let fetched: Todo = app
        .server
        .get(&format!("/todo/{}", todo.id))
        .add_header(name.clone(), value.clone())
        .await
        .json();
    assert_eq!(fetched, todo);

    let response = app
        .server
        .put(&format!("/update-todo/{}", todo.id))
        .add_header(name.clone(), value.clone())
        .json(&json!({"title": "final", "description": "done right", "priority": 4, "complete": true}))
        .await;
    response.assert_status_ok();
    let updated: Todo = response.json();
    assert_eq!(updated.title, "final");
    assert_eq!(updated.description.as_deref(), Some("done right"));
    assert_eq!(updated.priority, 4);
    assert!(updated.complete);

    let response = app
        .server
        .delete(&format!("/delete-todo/{}", todo.id))
        .add_header(name.clone(), value.clone())
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<TransactionResponse>(), TransactionResponse::successful(200));

    app.server
        .get(&format!("/todo/{}", todo.id))
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_nonexistent_id_is_not_found() {
    let app = create_test_app().await;
    let alice = create_test_user(&app.state, "alice", "password123").await.unwrap();
    let (name, value) = auth_header(&alice.token);

    let response = app.server.get("/todo/999").add_header(name.clone(), value.clone()).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "ToDo item not found.");

    app.server
        .put("/update-todo/999")
        .add_header(name.clone(), value.clone())
        .json(&json!({"title": "x", "priority": 1}))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    app.server
        .delete("/delete-todo/999")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_other_user_cannot_read_update_or_delete() {
    let app = create_test_app().await;
    let alice = create_test_user(&app.state, "alice", "password123").await.unwrap();
    let bob = create_test_user(&app.state, "bob", "password123").await.unwrap();
    let todo: Todo = create(&app, &alice, json!({"title": "private", "priority": 5})).await.json();

    let (name, value) = auth_header(&bob.token);
    app.server
        .get(&format!("/todo/{}", todo.id))
        .add_header(name.clone(), value.clone())
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .put(&format!("/update-todo/{}", todo.id))
        .add_header(name.clone(), value.clone())
        .json(&json!({"title": "hijacked", "priority": 1}))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .delete(&format!("/delete-todo/{}", todo.id))
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert_eq!(list(&app, &alice).await, vec![todo]);
}

#[tokio::test]
async fn test_todo_routes_require_identity() {
    let app = create_test_app().await;

    app.server.get("/todo").await.assert_status(StatusCode::UNAUTHORIZED);
    app.server
        .post("/create-todo")
        .json(&json!({"title": "x", "priority": 1}))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(app.db.count("todos").await, 0);
}
