use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use database::Pagination;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{ActivitySummary, CreateUser, NewUser, User};
use crate::repository::UserRepository;

/// Service layer for User business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new user with password hashing
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input.validate()?;

        let password_hash = hash_password(&input.password)?;

        self.repository
            .create(NewUser {
                username: input.username,
                email: input.email,
                full_name: input.full_name,
                password_hash,
            })
            .await
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: u64) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Get a user by exact username
    #[instrument(skip(self))]
    pub async fn get_user_by_username(&self, username: &str) -> UserResult<User> {
        self.repository
            .get_by_username(username)
            .await?
            .ok_or_else(|| UserError::UsernameNotFound(username.to_string()))
    }

    /// List users in creation order
    #[instrument(skip(self))]
    pub async fn list_users(&self, page: Pagination) -> UserResult<Vec<User>> {
        self.repository.list(page).await
    }

    #[instrument(skip(self))]
    pub async fn count_users(&self) -> UserResult<usize> {
        self.repository.count().await
    }

    /// User half of the statistics snapshot
    #[instrument(skip(self))]
    pub async fn activity_summary(&self) -> UserResult<ActivitySummary> {
        self.repository.activity_summary().await
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}
