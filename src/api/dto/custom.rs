//! DTOs for the custom alias endpoint.

use serde::{Deserialize, Serialize};

/// Request to rename the key behind `short_url` to `alias`.
///
/// The alias format is checked by the registry so the error kind stays
/// `invalid_alias` rather than a generic validation failure.
#[derive(Debug, Deserialize)]
pub struct CustomAliasRequest {
    pub short_url: String,
    pub alias: String,
}

#[derive(Debug, Serialize)]
pub struct CustomAliasResponse {
    pub short_url: String,
    pub key: String,
}
