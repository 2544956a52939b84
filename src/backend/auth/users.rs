/**
 * User Model and Database Operations
 *
 * This module handles user data and the queries behind registration and
 * login. Every function takes a connection rather than the pool, so callers
 * decide whether it runs inside a transaction.
 */

use serde::{Deserialize, Serialize};
use sqlx::SqliteConnection;

/// User struct representing a row of the `Users` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Email address (unique when present)
    pub email: Option<String>,
    /// Username (unique)
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub hashed_password: String,
    /// Inactive users cannot log in
    pub is_active: bool,
}

/// Fields supplied at registration, with the password still in plain text
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Insert a new user
///
/// # Arguments
/// * `conn` - Database connection
/// * `user` - Registration fields (the plain-text password is ignored)
/// * `hashed_password` - bcrypt hash to store
///
/// # Returns
/// Created user or error (a unique violation if the username or email exists)
pub async fn create_user(
    conn: &mut SqliteConnection,
    user: &NewUser,
    hashed_password: &str,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO Users (email, username, first_name, last_name, hashed_password, is_active)
        VALUES (?, ?, ?, ?, ?, 1)
        RETURNING id, email, username, first_name, last_name, hashed_password, is_active
        "#
    )
    .bind(&user.email)
    .bind(&user.username)
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(hashed_password)
    .fetch_one(&mut *conn)
    .await?;

    Ok(user)
}

/// Get user by username
pub async fn get_user_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, username, first_name, last_name, hashed_password, is_active
        FROM Users
        WHERE username = ?
        "#
    )
    .bind(username)
    .fetch_optional(&mut *conn)
    .await
}

/// Get user by email
pub async fn get_user_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, username, first_name, last_name, hashed_password, is_active
        FROM Users
        WHERE email = ?
        "#
    )
    .bind(email)
    .fetch_optional(&mut *conn)
    .await
}

/// Get user by ID
pub async fn get_user_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, username, first_name, last_name, hashed_password, is_active
        FROM Users
        WHERE id = ?
        "#
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
}

/// Count rows in the `Users` table
pub async fn count_users(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM Users")
        .fetch_one(&mut *conn)
        .await
}
