//! HTML page integration tests
//!
//! Login, registration and to-do forms through the rendered pages.

use axum::http::{header, StatusCode};
use axum_test::TestResponse;
use todoapp::shared::Todo;

use crate::common::auth_helpers::{cookie_header, create_test_app, create_test_user, TestApp, TestUser};
use crate::{assert_contains, assert_redirect};

fn set_cookie(response: &TestResponse) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .expect("Missing Set-Cookie header")
        .to_string()
}

async fn get_page(app: &TestApp, user: &TestUser, path: &str) -> TestResponse {
    let (name, value) = cookie_header(&user.token);
    app.server.get(path).add_header(name, value).await
}

async fn post_page(app: &TestApp, user: &TestUser, path: &str, form: &[(&str, &str)]) -> TestResponse {
    let (name, value) = cookie_header(&user.token);
    app.server.post(path).add_header(name, value).form(form).await
}

#[tokio::test]
async fn test_login_page_renders() {
    let app = create_test_app().await;

    for path in ["/auth", "/auth/"] {
        let response = app.server.get(path).await;
        response.assert_status_ok();
        assert_contains!(response.text(), "name=\"password\"");
    }
}

#[tokio::test]
async fn test_login_sets_cookie_and_redirects() {
    let app = create_test_app().await;
    let user = create_test_user(&app.state, "alice", "password123").await.unwrap();

    let response = app
        .server
        .post("/auth")
        .form(&[("email", "alice"), ("password", "password123")])
        .await;

    assert_redirect!(response, "/todos");
    let cookie = set_cookie(&response);
    assert!(cookie.starts_with("access_token="));
    assert_contains!(cookie, "HttpOnly");
    assert_contains!(cookie, "Max-Age=3600");

    let token = cookie
        .trim_start_matches("access_token=")
        .split(';')
        .next()
        .unwrap();
    let identity = app.state.auth.resolve_identity(token).unwrap();
    assert_eq!(identity.user_id, user.id);
}

#[tokio::test]
async fn test_login_failure_rerenders_form() {
    let app = create_test_app().await;
    create_test_user(&app.state, "alice", "password123").await.unwrap();

    let response = app
        .server
        .post("/auth/")
        .form(&[("email", "alice"), ("password", "wrong")])
        .await;

    response.assert_status_ok();
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert_contains!(response.text(), "Invalid username or password.");
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = create_test_app().await;

    let response = app.server.get("/auth/logout").await;
    response.assert_status_ok();
    assert_contains!(response.text(), "Logged Out Successfully");
    assert_contains!(set_cookie(&response), "Max-Age=0");
}

#[tokio::test]
async fn test_register_form_creates_user() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/auth/register")
        .form(&[
            ("email", "alice@example.com"),
            ("username", "alice"),
            ("firstname", "Alice"),
            ("lastname", "Liddell"),
            ("password", "password123"),
            ("password2", "password123"),
        ])
        .await;

    response.assert_status_ok();
    assert_contains!(response.text(), "User Created Successfully");
    assert_eq!(app.db.count("Users").await, 1);

    app.state.auth.authenticate("alice", "password123").await.unwrap();
}

#[tokio::test]
async fn test_register_form_rejects_mismatch_and_duplicates() {
    let app = create_test_app().await;
    create_test_user(&app.state, "alice", "password123").await.unwrap();

    let mismatch = app
        .server
        .post("/auth/register")
        .form(&[
            ("email", "bob@example.com"),
            ("username", "bob"),
            ("firstname", "Bob"),
            ("lastname", "Builder"),
            ("password", "password123"),
            ("password2", "password124"),
        ])
        .await;
    assert_contains!(mismatch.text(), "Invalid Registration Request.");

    let duplicate = app
        .server
        .post("/auth/register")
        .form(&[
            ("email", "new@example.com"),
            ("username", "alice"),
            ("firstname", "Alice"),
            ("lastname", "Again"),
            ("password", "password123"),
            ("password2", "password123"),
        ])
        .await;
    assert_contains!(duplicate.text(), "Invalid Registration Request.");

    assert_eq!(app.db.count("Users").await, 1);
}

#[tokio::test]
async fn test_todo_pages_redirect_anonymous_visitors() {
    let app = create_test_app().await;

    for path in ["/todos", "/todos/", "/todos/add-todo", "/todos/edit-todo/1", "/todos/delete/1"] {
        let response = app.server.get(path).await;
        assert_redirect!(response, "/auth");
    }
}

#[tokio::test]
async fn test_add_todo_through_form() {
    let app = create_test_app().await;
    let alice = create_test_user(&app.state, "alice", "password123").await.unwrap();

    let response = post_page(
        &app,
        &alice,
        "/todos/add-todo",
        &[("title", "buy milk"), ("description", ""), ("priority", "3")],
    )
    .await;
    assert_redirect!(response, "/todos");

    let todos = app.state.todos.list(Some(alice.id)).await.unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].title, "buy milk");
    assert_eq!(todos[0].description, None);
    assert_eq!(todos[0].owner_id, alice.id);

    let page = get_page(&app, &alice, "/todos").await;
    page.assert_status_ok();
    assert_contains!(page.text(), "buy milk");
}

#[tokio::test]
async fn test_add_todo_validation_rerenders_form() {
    let app = create_test_app().await;
    let alice = create_test_user(&app.state, "alice", "password123").await.unwrap();

    let response = post_page(
        &app,
        &alice,
        "/todos/add-todo",
        &[("title", "x"), ("description", ""), ("priority", "9")],
    )
    .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_contains!(response.text(), "The priority must be between 1-5");
    assert_eq!(app.db.count("todos").await, 0);
}

#[tokio::test]
async fn test_list_page_shows_only_own_todos() {
    let app = create_test_app().await;
    let alice = create_test_user(&app.state, "alice", "password123").await.unwrap();
    let bob = create_test_user(&app.state, "bob", "password123").await.unwrap();

    post_page(&app, &alice, "/todos/add-todo", &[("title", "alice task"), ("priority", "1")]).await;
    post_page(&app, &bob, "/todos/add-todo", &[("title", "bob task"), ("priority", "1")]).await;

    let page = get_page(&app, &bob, "/todos").await.text();
    assert_contains!(page, "bob task");
    assert!(!page.contains("alice task"));
}

#[tokio::test]
async fn test_edit_complete_and_delete_through_pages() {
    let app = create_test_app().await;
    let alice = create_test_user(&app.state, "alice", "password123").await.unwrap();
    post_page(&app, &alice, "/todos/add-todo", &[("title", "draft"), ("priority", "2")]).await;
    let todo: Todo = app.state.todos.list(Some(alice.id)).await.unwrap().remove(0);

    let edit_form = get_page(&app, &alice, &format!("/todos/edit-todo/{}", todo.id)).await;
    edit_form.assert_status_ok();
    assert_contains!(edit_form.text(), "draft");

    let response = post_page(
        &app,
        &alice,
        &format!("/todos/edit-todo/{}", todo.id),
        &[("title", "final"), ("description", "with notes"), ("priority", "4")],
    )
    .await;
    assert_redirect!(response, "/todos");

    let response = get_page(&app, &alice, &format!("/todos/complete/{}", todo.id)).await;
    assert_redirect!(response, "/todos");

    let stored = app.state.todos.get(todo.id, Some(alice.id)).await.unwrap();
    assert_eq!(stored.title, "final");
    assert_eq!(stored.description.as_deref(), Some("with notes"));
    assert_eq!(stored.priority, 4);
    assert!(stored.complete);

    let response = get_page(&app, &alice, &format!("/todos/delete/{}", todo.id)).await;
    assert_redirect!(response, "/todos");
    assert_eq!(app.db.count("todos").await, 0);
}

#[tokio::test]
async fn test_foreign_todo_pages_redirect_to_list() {
    let app = create_test_app().await;
    let alice = create_test_user(&app.state, "alice", "password123").await.unwrap();
    let bob = create_test_user(&app.state, "bob", "password123").await.unwrap();
    post_page(&app, &alice, "/todos/add-todo", &[("title", "private"), ("priority", "2")]).await;
    let todo = app.state.todos.list(Some(alice.id)).await.unwrap().remove(0);

    for path in [
        format!("/todos/edit-todo/{}", todo.id),
        format!("/todos/complete/{}", todo.id),
        format!("/todos/delete/{}", todo.id),
    ] {
        let response = get_page(&app, &bob, &path).await;
        assert_redirect!(response, "/todos");
    }

    assert_eq!(app.state.todos.get(todo.id, Some(alice.id)).await.unwrap(), todo);
}

#[tokio::test]
async fn test_static_stylesheet_is_served() {
    let app = create_test_app().await;
    let response = app.server.get("/static/css/base.css").await;
    response.assert_status_ok();
    assert_contains!(response.text(), ".navbar");
}
