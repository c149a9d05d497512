//! Handler for the custom alias endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::custom::{CustomAliasRequest, CustomAliasResponse};
use crate::error::RegistryError;
use crate::state::AppState;

/// Renames the key behind a short URL to a custom alias.
///
/// # Endpoint
///
/// `POST /api/custom`
///
/// # Request Body
///
/// ```json
/// { "short_url": "http://sho.rt/k3x9za", "alias": "launch-2025" }
/// ```
///
/// The old short URL stops resolving; the click count moves to the alias.
/// Requesting the current key as the alias is a successful no-op.
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid body, a malformed short URL or an
/// invalid alias.
/// Returns 404 Not Found if the source key has no mapping.
/// Returns 409 Conflict if the alias belongs to another mapping.
pub async fn custom_alias_handler(
    State(state): State<AppState>,
    payload: Result<Json<CustomAliasRequest>, JsonRejection>,
) -> Result<Json<CustomAliasResponse>, RegistryError> {
    let Json(payload) = payload?;

    let short_url = state
        .registry
        .make_custom(&payload.short_url, &payload.alias)
        .await?;
    let key = state.registry.key_of(&short_url)?.to_string();

    Ok(Json(CustomAliasResponse { short_url, key }))
}
