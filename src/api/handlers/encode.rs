//! Handler for the encode endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::encode::{EncodeRequest, EncodeResponse};
use crate::error::RegistryError;
use crate::state::AppState;

/// Shortens a long URL, reusing the existing short URL if it was seen before.
///
/// # Endpoint
///
/// `POST /api/encode`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_url": "http://sho.rt/k3x9za",
///   "key": "k3x9za",
///   "long_url": "https://example.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON or `long_url` is
/// missing, empty or contains a NUL character.
pub async fn encode_handler(
    State(state): State<AppState>,
    payload: Result<Json<EncodeRequest>, JsonRejection>,
) -> Result<Json<EncodeResponse>, RegistryError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let long_url = payload.long_url.unwrap_or_default();
    let short_url = state.registry.encode(&long_url).await?;
    let key = state.registry.key_of(&short_url)?.to_string();

    Ok(Json(EncodeResponse {
        short_url,
        key,
        long_url,
    }))
}
