//! Health check endpoints

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, health_router, run_health_checks};

use crate::state::AppState;

/// `/health` (liveness) and `/ready` (readiness)
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state.clone())
        .merge(health_router(state.config.app))
}

/// Readiness check - verifies both stores answer
#[utoipa::path(
    get,
    path = "/ready",
    tag = "System",
    responses(
        (status = 200, description = "All stores reachable"),
        (status = 503, description = "At least one store unreachable")
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![
        (
            "items",
            Box::pin(async {
                state
                    .items
                    .count_items()
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            }),
        ),
        (
            "users",
            Box::pin(async {
                state
                    .users
                    .count_users()
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            }),
        ),
    ];

    run_health_checks(checks).await
}
