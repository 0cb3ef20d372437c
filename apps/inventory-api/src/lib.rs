//! Inventory API
//!
//! Items, users and aggregate statistics over an in-memory store.

pub mod api;
pub mod config;
pub mod openapi;
pub mod state;

use axum::Router;
use std::io;

use state::AppState;

/// Assemble the full application router: API routes, probes, docs and
/// middleware.
pub fn build_router(state: &AppState) -> io::Result<Router> {
    axum_helpers::create_router::<openapi::ApiDoc>(api::routes(state), &state.config.cors)
}
