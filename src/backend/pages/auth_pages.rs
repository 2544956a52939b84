/**
 * Authentication Pages
 *
 * Login, logout and registration forms. A successful login stores the JWT
 * in the http-only `access_token` cookie and redirects to the to-do list;
 * failures re-render the form with a message.
 */

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::backend::auth::cookies::{access_cookie, clear_access_cookie};
use crate::backend::auth::service::AuthService;
use crate::backend::auth::users::NewUser;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::pages::templates::{message_context, Templates, LOGIN, REGISTER};
use crate::backend::pages::TODOS_PATH;

pub const INVALID_LOGIN: &str = "Invalid username or password.";
pub const LOGGED_OUT: &str = "Logged Out Successfully";
pub const INVALID_REGISTRATION: &str = "Invalid Registration Request.";
pub const USER_CREATED: &str = "User Created Successfully";

/// Login form; the `email` field carries the username
#[derive(Deserialize, Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form
#[derive(Deserialize, Debug)]
pub struct RegisterForm {
    #[serde(default)]
    pub email: String,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
    pub password2: String,
}

/// `GET /auth`
pub async fn login_page(State(templates): State<Templates>) -> BackendResult<Html<String>> {
    templates.render(LOGIN, &message_context(""))
}

/// `POST /auth`
pub async fn login(
    State(auth): State<AuthService>,
    State(templates): State<Templates>,
    Form(form): Form<LoginForm>,
) -> BackendResult<Response> {
    let user = match auth.authenticate(&form.email, &form.password).await {
        Ok(user) => user,
        Err(BackendError::Unauthorized { .. }) => {
            return Ok(templates.render(LOGIN, &message_context(INVALID_LOGIN))?.into_response());
        }
        Err(e) => return Err(e),
    };

    let token = auth.issue_cookie_token(&user)?;
    let cookie = access_cookie(&token, auth.config().cookie_ttl).ok_or_else(|| {
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Token is not a valid cookie value")
    })?;

    tracing::info!("User {} logged in", user.username);

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, HeaderValue::from_static(TODOS_PATH)),
            (header::SET_COOKIE, cookie),
        ],
    )
        .into_response())
}

/// `GET /auth/logout`
pub async fn logout(State(templates): State<Templates>) -> BackendResult<Response> {
    let page = templates.render(LOGIN, &message_context(LOGGED_OUT))?;
    Ok(([(header::SET_COOKIE, clear_access_cookie())], page).into_response())
}

/// `GET /auth/register`
pub async fn register_page(State(templates): State<Templates>) -> BackendResult<Html<String>> {
    templates.render(REGISTER, &message_context(""))
}

/// `POST /auth/register`
///
/// Mismatched passwords, blank fields and duplicate usernames or emails all
/// re-render the form with the same message; no user is created.
pub async fn register(
    State(auth): State<AuthService>,
    State(templates): State<Templates>,
    Form(form): Form<RegisterForm>,
) -> BackendResult<Html<String>> {
    if form.password != form.password2 {
        tracing::warn!("Registration for {} with mismatched passwords", form.username);
        return templates.render(REGISTER, &message_context(INVALID_REGISTRATION));
    }

    let new_user = NewUser {
        username: form.username,
        email: Some(form.email),
        first_name: form.firstname,
        last_name: form.lastname,
        password: form.password,
    };

    match auth.register(new_user).await {
        Ok(_) => templates.render(LOGIN, &message_context(USER_CREATED)),
        Err(e) if e.is_client_error() => templates.render(REGISTER, &message_context(INVALID_REGISTRATION)),
        Err(e) => Err(e),
    }
}
