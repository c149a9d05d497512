//! DTOs for the encode endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a long URL.
///
/// `long_url` is optional at the serde level so a missing field is reported
/// as an invalid input rather than a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct EncodeRequest {
    #[validate(required(message = "long_url is required"), length(min = 1))]
    pub long_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EncodeResponse {
    pub short_url: String,
    pub key: String,
    pub long_url: String,
}
