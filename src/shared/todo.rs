//! To-do Types
//!
//! The to-do record as stored and returned by the API, the payload accepted on
//! create/update, and the field constraints both adapters enforce.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::shared::error::SharedError;

/// Maximum description length, in characters
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Accepted priority values
pub const PRIORITY_RANGE: RangeInclusive<i32> = 1..=5;

/// A to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub priority: i32,
    pub complete: bool,
    pub owner_id: i64,
}

/// Fields supplied when creating or updating a to-do
///
/// `complete` is optional: a create without it starts incomplete, an update
/// without it keeps the stored flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: i32,
    #[serde(default)]
    pub complete: Option<bool>,
}

impl TodoRequest {
    /// Check the field constraints
    ///
    /// Returns the first violated constraint as a validation error naming the
    /// field.
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.title.trim().is_empty() {
            return Err(SharedError::validation("title", "Title is required"));
        }
        if let Some(description) = &self.description {
            if description.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(SharedError::validation(
                    "description",
                    format!("Description must be at most {} characters", MAX_DESCRIPTION_LEN),
                ));
            }
        }
        if !PRIORITY_RANGE.contains(&self.priority) {
            return Err(SharedError::validation(
                "priority",
                "The priority must be between 1-5",
            ));
        }
        Ok(())
    }
}

/// Acknowledgement body for mutations that return no record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub status: u16,
    pub transaction: String,
}

impl TransactionResponse {
    pub fn successful(status: u16) -> Self {
        Self {
            status,
            transaction: "Successful".to_string(),
        }
    }
}
