//! DTOs for the decode endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct DecodeRequest {
    pub short_url: String,
}

#[derive(Debug, Serialize)]
pub struct DecodeResponse {
    pub long_url: String,
}
