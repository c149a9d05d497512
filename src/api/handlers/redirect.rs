//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, warn};

use crate::error::RegistryError;
use crate::state::AppState;

/// Redirects a short key to its long URL.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// The key is expanded to its full short URL and decoded through the
/// registry, so each delivered redirect counts exactly one click.
///
/// Keys equal to a static route segment (`health`, `api`) are valid aliases
/// but are served by that route instead, so they never reach this handler.
/// They still resolve through `POST /api/decode`.
///
/// # Errors
///
/// Returns 404 Not Found if the key has no mapping.
/// Returns 500 Internal Server Error, without counting a click, if the long
/// URL cannot be sent as a `Location` header.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, RegistryError> {
    if let Some(mapping) = state.registry.repository().find_by_key(&key).await? {
        location_header(&key, &mapping.long_url)?;
    }

    let short_url = state.registry.short_url_for(&key);
    let long_url = state.registry.decode(&short_url).await?;
    let location = location_header(&key, &long_url)?;

    debug!("Redirecting {} to {}", key, long_url);

    Ok((StatusCode::TEMPORARY_REDIRECT, [(LOCATION, location)]).into_response())
}

/// Converts a stored long URL into a `Location` header value.
fn location_header(key: &str, long_url: &str) -> Result<HeaderValue, RegistryError> {
    HeaderValue::try_from(long_url).map_err(|_| {
        warn!("Long URL for key {} is not a valid Location header", key);
        RegistryError::internal(
            "Long URL cannot be used as a redirect target",
            json!({ "key": key }),
        )
    })
}
