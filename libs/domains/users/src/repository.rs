use async_trait::async_trait;
use database::{IdGenerator, Pagination, SharedClock, SystemClock};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{ActivitySummary, NewUser, UniqueField, User};

/// Repository trait for User storage
///
/// Users are append-only: there is no update or delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user, rejecting duplicate usernames and emails
    async fn create(&self, input: NewUser) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: u64) -> UserResult<Option<User>>;

    /// Get a user by exact username
    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>>;

    /// List users in creation order
    async fn list(&self, page: Pagination) -> UserResult<Vec<User>>;

    /// Count stored users
    async fn count(&self) -> UserResult<usize>;

    /// User count and active user count, read in one pass
    async fn activity_summary(&self) -> UserResult<ActivitySummary>;
}

/// In-memory implementation of UserRepository
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<u64, User>>>,
    ids: Arc<IdGenerator>,
    clock: SharedClock,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: SharedClock) -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            ids: Arc::new(IdGenerator::new()),
            clock,
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: NewUser) -> UserResult<User> {
        input.validate()?;

        let mut users = self.users.write().await;

        // Username clashes take precedence over email clashes.
        for field in [UniqueField::Username, UniqueField::Email] {
            if users.values().any(|u| u.shares(field, &input)) {
                return Err(UserError::Conflict { field });
            }
        }

        let user = User::new(self.ids.next(), input, self.clock.now());
        users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, username = %user.username, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: u64) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        let user = users.values().find(|u| u.username == username).cloned();
        Ok(user)
    }

    async fn list(&self, page: Pagination) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(page.apply(users.values()).cloned().collect())
    }

    async fn count(&self) -> UserResult<usize> {
        let users = self.users.read().await;
        Ok(users.len())
    }

    async fn activity_summary(&self) -> UserResult<ActivitySummary> {
        let users = self.users.read().await;
        Ok(ActivitySummary {
            total_users: users.len(),
            active_users: users.values().filter(|u| u.is_active).count(),
        })
    }
}
