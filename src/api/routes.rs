//! API route configuration.

use crate::api::handlers::{custom_alias_handler, decode_handler, encode_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Registry operations exposed under `/api`.
///
/// # Endpoints
///
/// - `POST /encode` - Shorten a long URL
/// - `POST /decode` - Resolve a short URL (counts a click)
/// - `POST /custom` - Rename a short URL to a custom alias
/// - `GET  /stats`  - Click count for a short URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/encode", post(encode_handler))
        .route("/decode", post(decode_handler))
        .route("/custom", post(custom_alias_handler))
        .route("/stats", get(stats_handler))
}
