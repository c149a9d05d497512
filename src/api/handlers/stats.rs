//! Handler for click statistics.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::stats::{StatsQuery, StatsResponse};
use crate::error::RegistryError;
use crate::state::AppState;

/// Returns the click count of a short URL without counting a click.
///
/// # Endpoint
///
/// `GET /api/stats?short_url=http://sho.rt/k3x9za`
///
/// # Errors
///
/// Returns 400 Bad Request if `short_url` is missing or malformed.
/// Returns 404 Not Found if the key has no mapping.
pub async fn stats_handler(
    State(state): State<AppState>,
    params: Result<Query<StatsQuery>, QueryRejection>,
) -> Result<Json<StatsResponse>, RegistryError> {
    let Query(params) = params?;
    let clicks = state.registry.get_click_stats(&params.short_url).await?;

    Ok(Json(StatsResponse {
        short_url: params.short_url,
        clicks,
    }))
}
