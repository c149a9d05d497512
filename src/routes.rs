//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{key}`   - Short link redirect
//! - `GET  /health`  - Health check
//! - `/api/*`        - Registry operations
//!
//! The static routes take precedence over `/{key}`, so the aliases `health`
//! and `api` are accepted by the registry but never redirect here.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// All routes with request tracing, before path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{key}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
