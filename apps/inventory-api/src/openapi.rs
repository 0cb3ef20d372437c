//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::{health, root};

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sample FastAPI Application",
        version = "1.0.0",
        description = "In-memory REST API for inventory items, users and aggregate statistics",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(root::root, health::readiness_check),
    components(schemas(root::RootResponse)),
    nest(
        (path = "/items", api = domain_items::ApiDoc),
        (path = "/users", api = domain_users::ApiDoc),
        (path = "/stats", api = domain_stats::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Inventory item endpoints"),
        (name = "Users", description = "User registration and lookup"),
        (name = "Stats", description = "Aggregate statistics"),
        (name = "System", description = "Service metadata and probes")
    )
)]
pub struct ApiDoc;
