//! Handler for the decode endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::decode::{DecodeRequest, DecodeResponse};
use crate::error::RegistryError;
use crate::state::AppState;

/// Resolves a short URL to its long URL and counts the click.
///
/// # Endpoint
///
/// `POST /api/decode`
///
/// # Errors
///
/// Returns 400 Bad Request if the body is invalid or the short URL is malformed.
/// Returns 404 Not Found if the key has no mapping.
pub async fn decode_handler(
    State(state): State<AppState>,
    payload: Result<Json<DecodeRequest>, JsonRejection>,
) -> Result<Json<DecodeResponse>, RegistryError> {
    let Json(payload) = payload?;
    let long_url = state.registry.decode(&payload.short_url).await?;

    Ok(Json(DecodeResponse { long_url }))
}
