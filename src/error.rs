//! Error taxonomy shared by the registry, storage backends and HTTP layer.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload returned by the HTTP API.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors produced by [`crate::application::services::LinkRegistry`] and its storage.
///
/// Every variant carries a human-readable message and free-form JSON details.
/// Nothing is retried or swallowed internally; callers always see the kind.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The long URL passed to `encode` was empty or unstorable, or a request
    /// body could not be parsed.
    #[error("{message}")]
    InvalidInput { message: String, details: Value },

    /// The short URL lacks the configured base prefix or carries no key.
    #[error("{message}")]
    MalformedShortUrl { message: String, details: Value },

    /// No mapping exists for the requested key.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The key being renamed has no mapping.
    #[error("{message}")]
    SourceNotFound { message: String, details: Value },

    /// The requested custom alias fails the format check.
    #[error("{message}")]
    InvalidAlias { message: String, details: Value },

    /// The requested custom alias already belongs to another mapping.
    #[error("{message}")]
    AliasTaken { message: String, details: Value },

    /// Storage failure or key space exhaustion.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl RegistryError {
    pub fn invalid_input(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidInput {
            message: message.into(),
            details,
        }
    }
    pub fn malformed_short_url(message: impl Into<String>, details: Value) -> Self {
        Self::MalformedShortUrl {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn source_not_found(message: impl Into<String>, details: Value) -> Self {
        Self::SourceNotFound {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_alias(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidAlias {
            message: message.into(),
            details,
        }
    }
    pub fn alias_taken(message: impl Into<String>, details: Value) -> Self {
        Self::AliasTaken {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for this error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::MalformedShortUrl { .. } => "malformed_short_url",
            Self::NotFound { .. } => "not_found",
            Self::SourceNotFound { .. } => "source_not_found",
            Self::InvalidAlias { .. } => "invalid_alias",
            Self::AliasTaken { .. } => "alias_taken",
            Self::Internal { .. } => "internal_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { .. }
            | Self::MalformedShortUrl { .. }
            | Self::InvalidAlias { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::SourceNotFound { .. } => StatusCode::NOT_FOUND,
            Self::AliasTaken { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = self.parts();
        ErrorInfo {
            code: self.kind(),
            message: message.clone(),
            details: details.clone(),
        }
    }

    fn parts(&self) -> (&String, &Value) {
        match self {
            Self::InvalidInput { message, details }
            | Self::MalformedShortUrl { message, details }
            | Self::NotFound { message, details }
            | Self::SourceNotFound { message, details }
            | Self::InvalidAlias { message, details }
            | Self::AliasTaken { message, details }
            | Self::Internal { message, details } => (message, details),
        }
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for RegistryError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("Storage error: {}", e);
        RegistryError::internal("Storage error", json!({}))
    }
}

impl From<validator::ValidationErrors> for RegistryError {
    fn from(e: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = e.field_errors().keys().map(|k| k.to_string()).collect();
        RegistryError::invalid_input("Request validation failed", json!({ "fields": fields }))
    }
}

impl From<JsonRejection> for RegistryError {
    fn from(e: JsonRejection) -> Self {
        RegistryError::invalid_input("Invalid request body", json!({ "reason": e.body_text() }))
    }
}

impl From<QueryRejection> for RegistryError {
    fn from(e: QueryRejection) -> Self {
        RegistryError::invalid_input("Invalid query string", json!({ "reason": e.body_text() }))
    }
}
