//! Service metadata endpoint

use axum::{Json, Router, extract::State, routing::get};
use core_config::AppInfo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    /// Path of the Swagger UI
    pub docs: String,
    /// Path of the ReDoc UI
    pub redoc: String,
}

pub fn router(app: AppInfo) -> Router {
    Router::new().route("/", get(root)).with_state(app)
}

/// Welcome message with version and documentation links
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Service metadata", body = RootResponse)
    )
)]
pub async fn root(State(app): State<AppInfo>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {}", app.title),
        version: app.version.to_string(),
        docs: "/docs".to_string(),
        redoc: "/redoc".to_string(),
    })
}
