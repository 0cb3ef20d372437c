//! Application state management.
//!
//! The repositories are constructed once at startup and shared by every
//! service that reads them; no collection lives in a global.

use database::{SharedClock, SystemClock};
use domain_items::{InMemoryItemRepository, ItemService};
use domain_stats::StatsService;
use domain_users::{InMemoryUserRepository, UserService};
use std::sync::Arc;

use crate::config::Config;

pub type Items = ItemService<InMemoryItemRepository>;
pub type Users = UserService<InMemoryUserRepository>;
pub type Stats = StatsService<InMemoryItemRepository, InMemoryUserRepository>;

/// Shared application state.
///
/// Cloning is cheap: every service holds its repository behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    pub items: Items,
    pub users: Users,
    pub stats: Stats,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build state whose repositories stamp timestamps from `clock`.
    pub fn with_clock(config: Config, clock: SharedClock) -> Self {
        let items = ItemService::new(InMemoryItemRepository::with_clock(clock.clone()));
        let users = UserService::new(InMemoryUserRepository::with_clock(clock));
        let stats = StatsService::new(items.clone(), users.clone());

        Self {
            config,
            items,
            users,
            stats,
        }
    }
}
