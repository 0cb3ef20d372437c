use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;
use validator::Validate;

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned on creation
    pub id: u64,
    /// Unique, case-sensitive login name
    pub username: String,
    /// Unique email address
    pub email: String,
    pub full_name: Option<String>,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Account active status
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// A validated registration with the password already hashed.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewUser {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    pub full_name: Option<String>,
    #[validate(length(min = 1))]
    pub password_hash: String,
}

/// Attribute that must be unique across all users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, ToSchema)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UniqueField {
    Username,
    Email,
}

/// User half of the statistics snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ActivitySummary {
    pub total_users: usize,
    pub active_users: usize,
}

impl User {
    /// Build a new, active user.
    pub fn new(id: u64, input: NewUser, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username: input.username,
            email: input.email,
            full_name: input.full_name,
            password_hash: input.password_hash,
            is_active: true,
            created_at: now,
        }
    }

    /// Whether `candidate` would duplicate this user's `field`.
    ///
    /// Usernames compare exactly; emails compare case-insensitively.
    pub fn shares(&self, field: UniqueField, candidate: &NewUser) -> bool {
        match field {
            UniqueField::Username => self.username == candidate.username,
            UniqueField::Email => self.email.eq_ignore_ascii_case(&candidate.email),
        }
    }
}
