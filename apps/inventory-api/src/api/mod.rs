//! API routes module

pub mod health;
pub mod root;

use axum::Router;
use domain_items::handlers as items;
use domain_stats::handlers as stats;
use domain_users::handlers as users;

use crate::state::AppState;

/// Create all API routes, mounted at the root
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/items", items::router(state.items.clone()))
        .nest("/users", users::router(state.users.clone()))
        .nest("/stats", stats::router(state.stats.clone()))
        .merge(root::router(state.config.app))
        .merge(health::router(state.clone()))
}
