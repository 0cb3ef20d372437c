use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::errors::responses::InternalServerErrorResponse;
use domain_items::ItemRepository;
use domain_users::UserRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::StatsResult;
use crate::models::Stats;
use crate::service::StatsService;

/// OpenAPI documentation for Stats API
#[derive(OpenApi)]
#[openapi(
    paths(get_stats),
    components(schemas(Stats), responses(InternalServerErrorResponse)),
    tags(
        (name = "Stats", description = "Aggregate statistics")
    )
)]
pub struct ApiDoc;

/// Create the stats router
pub fn router<I, U>(service: StatsService<I, U>) -> Router
where
    I: ItemRepository + 'static,
    U: UserRepository + 'static,
{
    Router::new()
        .route("/", get(get_stats))
        .with_state(Arc::new(service))
}

/// Current item and user statistics
#[utoipa::path(
    get,
    path = "",
    tag = "Stats",
    responses(
        (status = 200, description = "Statistics snapshot", body = Stats),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_stats<I: ItemRepository, U: UserRepository>(
    State(service): State<Arc<StatsService<I, U>>>,
) -> StatsResult<Json<Stats>> {
    let stats = service.compute().await?;
    Ok(Json(stats))
}
